#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imkern_array as array;

#[doc(inline)]
pub use imkern_factors as factors;

#[doc(inline)]
pub use imkern_kernels as kernels;
