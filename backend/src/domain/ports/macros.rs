//! Macro generating the error enums that driven ports return.
//!
//! Each variant becomes a `thiserror` variant plus a snake-case constructor
//! whose `String` fields accept anything `Into<String>`:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum ShelfError {
//!         Connection { message: String } => "shelf offline: {message}",
//!     }
//! }
//!
//! let err = ShelfError::connection("refused");
//! ```

macro_rules! define_port_error {
    (@constructor $variant:ident) => {
        ::paste::paste! {
            #[allow(dead_code)]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[allow(dead_code)]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
