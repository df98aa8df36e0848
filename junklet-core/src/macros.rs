//! `junklet!`: fixture accessors as methods.

/// Define a struct whose methods are memoized junk accessors.
///
/// Each listed name becomes a method returning `&str` shaped
/// `<name><separator><32 hex digits>`. The value is generated on the first
/// call on an instance and cached for that instance. An optional string
/// literal after a name overrides the default `_` separator for it.
///
/// `new()` draws from the thread RNG; `with_generator` takes any
/// [`Generator`](crate::Generator), e.g. a seeded one for reproducible runs.
///
/// ```
/// use junklet_core::Generator;
///
/// junklet_core::junklet! {
///     struct Names {
///         trash,
///         host_name: "-",
///         last_name: ".",
///     }
/// }
///
/// let names = Names::new();
/// assert!(names.trash().starts_with("trash_"));
/// assert_eq!(names.trash(), names.trash());
/// assert!(names.host_name().starts_with("host-name-"));
/// assert!(names.last_name().starts_with("last.name."));
///
/// // Another instance gets its own values.
/// assert_ne!(Names::new().trash(), names.trash());
///
/// // Same seed, same values.
/// let a = Names::with_generator(Generator::seeded(3));
/// let b = Names::with_generator(Generator::seeded(3));
/// assert_eq!(a.trash(), b.trash());
/// ```
#[macro_export]
macro_rules! junklet {
    (@separator) => {
        $crate::accessor::DEFAULT_SEPARATOR
    };
    (@separator $sep:literal) => {
        $sep
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $scope:ident {
            $($name:ident $(: $sep:literal)?),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $scope<R = $crate::random::ThreadRng> {
            $($name: $crate::Binding,)+
            junk_source: ::std::cell::RefCell<$crate::Generator<R>>,
        }

        #[allow(dead_code)]
        impl $scope {
            pub fn new() -> Self {
                Self::with_generator($crate::Generator::new())
            }
        }

        impl ::std::default::Default for $scope {
            fn default() -> Self {
                Self::new()
            }
        }

        #[allow(dead_code)]
        impl<R: $crate::RandomSource> $scope<R> {
            pub fn with_generator(generator: $crate::Generator<R>) -> Self {
                Self {
                    $($name: $crate::Binding::new(
                        stringify!($name),
                        $crate::junklet!(@separator $($sep)?),
                    ),)+
                    junk_source: ::std::cell::RefCell::new(generator),
                }
            }

            $(
                pub fn $name(&self) -> &str {
                    self.$name
                        .value_with(|len| self.junk_source.borrow_mut().hex(len))
                }
            )+
        }
    };
}
