use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of observable properties declared by a subject.
///
/// Names are validated against [`Property::ALL`] when binding by name, so a typo in
/// an observer shows up as an error at startup instead of a binding that never fires.
pub trait Property: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every property the subject declares, in declaration order
    const ALL: &'static [Self];

    /// Name of the subject that declares these properties, used in errors and logs
    const SUBJECT: &'static str;

    /// The string identifier of this property
    fn name(&self) -> &'static str;

    /// Look up a property by its string identifier
    fn from_name(name: &str) -> Option<Self> { Self::ALL.iter().copied().find(|property| property.name() == name) }
}

/// Declare a property enum for a subject.
///
/// ```rust
/// bookplay_signals::properties! {
///     /// Properties of a volume knob
///     pub enum KnobProperty for "Knob" {
///         Level => "level",
///         Muted => "muted",
///     }
/// }
///
/// use bookplay_signals::Property;
/// assert_eq!(KnobProperty::from_name("muted"), Some(KnobProperty::Muted));
/// assert_eq!(KnobProperty::Level.to_string(), "level");
/// ```
#[macro_export]
macro_rules! properties {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $subject:literal {
            $($(#[$vmeta:meta])* $variant:ident => $pname:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::Property for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const SUBJECT: &'static str = $subject;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $pname),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Property::name(self))
            }
        }
    };
}
