pub mod idna;
pub mod percent_encode;
