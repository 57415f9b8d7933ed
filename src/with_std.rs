
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        default,
        fmt,
        mem,
        ops,
        iter,
        slice,
    };

    pub use std::boxed::Box;
    pub use std::vec::Vec;
}
