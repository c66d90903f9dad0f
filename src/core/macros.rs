//! Macros for declaring automaton state sets.

/// Declare a closed state enumeration and generate its `State` impl.
///
/// Every variant carries its numeric identifier. The `initial:` state is
/// required; `accepting:` and `sink:` lists are optional. Anything not
/// listed is transient.
///
/// The macro also generates `ALL` (every state in declaration order) and
/// `from_id`.
///
/// # Example
///
/// ```
/// use atm_automaton::core::{Classification, State};
/// use atm_automaton::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked = 0,
///         Unlocked = 1,
///         Broken = 2,
///     }
///     initial: Locked
///     sink: [Broken]
/// }
///
/// assert_eq!(Turnstile::from_id(1), Some(Turnstile::Unlocked));
/// assert_eq!(Turnstile::Broken.classification(), Classification::Sink);
/// assert_eq!(Turnstile::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $id:literal
            ),* $(,)?
        }

        initial: $initial:ident
        $(accepting: [$($accepting:ident),* $(,)?])?
        $(sink: [$($sink:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Look a state up by its numeric identifier.
            pub fn from_id(id: u8) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "q{} ({})", $crate::core::State::id(self), $crate::core::State::name(self))
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn id(&self) -> u8 {
                match self {
                    $(Self::$variant => $id),*
                }
            }

            fn is_initial(&self) -> bool {
                matches!(self, Self::$initial)
            }

            #[allow(unreachable_patterns)]
            fn is_accepting(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_sink(&self) -> bool {
                match self {
                    $($(Self::$sink => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
