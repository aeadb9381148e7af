/// Address families and prefix normalization
pub mod family;
pub mod range;

pub use family::Family;
pub use range::Range;
