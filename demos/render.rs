#![allow(clippy::expect_used, clippy::print_stdout)]

use urlrender::{Deployment, Renderer, Url};

fn main() {
    // The page being rendered, in an application mounted at /shop with its
    // dispatcher at /shop/app
    let base = Url::parse("http://www.example.com/shop/app/products/list?page=2")
        .expect("Failed to parse base URL");
    let renderer = Renderer::with_deployment(base, Deployment::new("/shop", "/app"));

    for target in [
        "http://www.example.com/shop/app/products/detail?id=7",
        "http://www.example.com/shop/app/cart",
        "https://www.example.com/shop/app/checkout",
        "//cdn.example.com/lib.js",
    ] {
        let url = Url::parse(target).expect("Failed to parse target URL");
        println!("{target} -> {}", renderer.render_url(&url));
    }
    // ./detail?id=7
    // ../cart
    // https://www.example.com/shop/app/checkout
    // //cdn.example.com/lib.js

    let css = renderer
        .render_context_relative_url(Some("/css/site.css"))
        .expect("Failed to render context-relative URL");
    println!("stylesheet: {css}"); // ../../css/site.css

    let full = renderer.render_full_url(&Url::parse("../help").expect("Failed to parse URL"));
    println!("full: {full}"); // http://www.example.com/shop/app/help
}
