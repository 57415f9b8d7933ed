#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        mem,
        ops,
        iter,
        slice,
    };

    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;
}
