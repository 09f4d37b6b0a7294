macro_rules! impl_error {
    ($ty:ident, $message:expr) => {
        #[doc = concat!("The error type of `", stringify!($ty), "`.")]
        ///
        /// Carries the rejected input so callers can report it.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            input: alloc::string::String,
        }

        impl $ty {
            pub(crate) fn new(input: &str) -> Self {
                Self {
                    input: alloc::string::String::from(input),
                }
            }

            /// Returns the input that failed to parse.
            pub fn input(&self) -> &str {
                &self.input
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}: `{}`", $message, self.input)
            }
        }

        impl core::error::Error for $ty {}
    };
}
