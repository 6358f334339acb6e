//! Core trait for validated value objects.
//!
//! A value object wraps a single raw value and guarantees that the value
//! satisfies the type's invariant. Instances only come into existence through
//! the construction entry points on [`ValueObject`], and every entry point runs
//! the same gate: build the wrapper with the type's construction function, then
//! run its validation hook. The entry points differ only in how they report the
//! outcome.
//!
//! ## Construction conventions
//!
//! | Method | Failure reported as |
//! |---|---|
//! | [`ValueObject::create`] | `Err(ValidationError)` |
//! | [`ValueObject::from_value`] | panic |
//! | [`ValueObject::try_create`] | `None` |
//! | [`ValueObject::is_valid`] | `false` |
//! | [`ValueObject::create_result`] | `Err(ValidationError)`, raw value on success |
//! | [`ValueObject::create_result_from`] | existing `Err` propagated, else as above |
//! | [`ValueObject::check`] | `Err(ValidationError)`, [`Valid`] on success |
//!
//! All conventions except `from_value` contain panics raised by the
//! construction function or the hook and report them as
//! [`ValidationError::ConstructionFault`].
//!
//! Containment does not silence the process panic hook. The default hook
//! still prints `thread '..' panicked at ..` to stderr for each contained
//! fault. Hosts that treat stderr as an error channel should install their
//! own hook with [`std::panic::set_hook`].

use crate::error::{Valid, ValidationError, ValidationResult};
use log::{debug, trace, warn};
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

/// Proof that a construction function is being called from the validation gate.
///
/// The field is private, so only this module can create one. Implementors
/// receive it as an argument and never need to build it themselves.
#[derive(Debug)]
pub struct ConstructionGate(());

/// Core trait for all validated value objects.
///
/// Implementors supply the construction function and, optionally, a
/// validation hook. The construction entry points are provided and must not be
/// overridden; they all funnel through the same gate.
///
/// Most types should be declared with [`value_object!`](crate::value_object)
/// rather than implementing this trait by hand.
///
/// ## Example
///
/// ```rust
/// use domain_guard::error::{ValidationError, ValidationResult};
/// use domain_guard::value_objects::{ConstructionGate, ValueObject};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Port(u16);
///
/// impl ValueObject for Port {
///     type Value = u16;
///
///     fn from_value_unchecked(value: u16, _gate: ConstructionGate) -> Self {
///         Port(value)
///     }
///
///     fn value(&self) -> &u16 {
///         &self.0
///     }
///
///     fn into_value(self) -> u16 {
///         self.0
///     }
///
///     fn validate(&self) -> ValidationResult<()> {
///         if self.0 == 0 {
///             return Err(ValidationError::invalid("Port", "port 0 is reserved"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Port::create(8080).is_ok());
/// assert!(Port::try_create(0).is_none());
/// ```
pub trait ValueObject: Sized {
    /// The raw wrapped type
    type Value;

    /// Build the wrapper around an unvalidated value.
    ///
    /// This is the per-type construction function. It is only reachable from
    /// the validation gate, which runs [`validate`](Self::validate) on the
    /// result before handing it out.
    fn from_value_unchecked(value: Self::Value, gate: ConstructionGate) -> Self;

    /// Borrow the wrapped value
    fn value(&self) -> &Self::Value;

    /// Consume the wrapper and return the wrapped value
    fn into_value(self) -> Self::Value;

    /// Validation hook. Accepts every value unless overridden.
    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }

    /// Short type name used in errors and logs.
    ///
    /// Module path and generic arguments are dropped, so `a::Wrapper<b::C>`
    /// becomes `Wrapper`.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Construct a validated instance.
    ///
    /// Returns the hook's error on an invalid value. Panics raised during
    /// construction are contained and reported as a construction fault; the
    /// panic hook still runs and reports them on stderr.
    fn create(item: Self::Value) -> ValidationResult<Self> {
        contained_gate(item)
    }

    /// Construct a validated instance or panic.
    ///
    /// Use when an invalid value is a programming error. A hook failure panics
    /// with the error's message; a panic raised inside the construction
    /// function or hook propagates unmodified.
    fn from_value(item: Self::Value) -> Self {
        match gate(item) {
            Ok(instance) => instance,
            Err(error) => panic!("{}", error),
        }
    }

    /// Construct a validated instance, or `None` when the value is invalid.
    fn try_create(item: Self::Value) -> Option<Self> {
        contained_gate(item).ok()
    }

    /// Report whether `item` would construct successfully.
    fn is_valid(item: Self::Value) -> bool {
        contained_gate::<Self>(item).is_ok()
    }

    /// Validate and hand back the raw value rather than the wrapper.
    fn create_result(item: Self::Value) -> ValidationResult<Self::Value> {
        contained_gate::<Self>(item).map(Self::into_value)
    }

    /// Validate the success value of an already tagged result.
    ///
    /// An error already present in `input` is converted and propagated without
    /// running the hook.
    fn create_result_from<E>(input: Result<Self::Value, E>) -> ValidationResult<Self::Value>
    where
        E: Into<ValidationError>,
    {
        match input {
            Ok(item) => Self::create_result(item),
            Err(error) => Err(error.into()),
        }
    }

    /// Validate without keeping the value.
    fn check(item: Self::Value) -> ValidationResult<Valid> {
        contained_gate::<Self>(item).map(|_| Valid)
    }

    /// Run the validation hook again against this instance's own value.
    fn revalidate(&self) -> ValidationResult<()> {
        self.validate()
    }
}

/// The single validation gate shared by every construction entry point.
fn gate<T: ValueObject>(item: T::Value) -> ValidationResult<T> {
    let candidate = T::from_value_unchecked(item, ConstructionGate(()));
    match candidate.validate() {
        Ok(()) => {
            trace!("Constructed {}", T::type_name());
            Ok(candidate)
        }
        Err(error) => {
            debug!("Rejected {} value: {}", T::type_name(), error);
            Err(error)
        }
    }
}

/// Run the gate and turn any panic into a construction fault.
fn contained_gate<T: ValueObject>(item: T::Value) -> ValidationResult<T> {
    match panic::catch_unwind(AssertUnwindSafe(|| gate::<T>(item))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(
                "Contained panic while constructing {}: {}",
                T::type_name(),
                message
            );
            Err(ValidationError::construction_fault(T::type_name(), message))
        }
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Compare two possibly absent value objects by wrapped value.
///
/// Two absent values are equal. Exactly one absent value is unequal.
pub fn equals<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: ValueObject,
    T::Value: PartialEq,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.value() == right.value(),
        _ => false,
    }
}

/// Negation of [`equals`].
pub fn not_equals<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: ValueObject,
    T::Value: PartialEq,
{
    !equals(left, right)
}

/// Hash a value object by its wrapped value only.
pub fn hash_of<T>(object: &T) -> u64
where
    T: ValueObject,
    T::Value: Hash,
{
    let mut hasher = DefaultHasher::new();
    object.value().hash(&mut hasher);
    hasher.finish()
}

/// Declare a newtype value object.
///
/// Generates the struct, its [`ValueObject`] implementation, value-based
/// `PartialEq`/`Eq`/`Hash`, `Display`, `AsRef`, `TryFrom` and serde support.
/// Serialization is transparent and deserialization goes through
/// [`ValueObject::create`], so invalid input never deserializes.
///
/// The wrapped type must implement `Debug`, `Clone`, `Eq`, `Hash`, `Display`,
/// `Serialize` and `Deserialize`.
///
/// ```rust
/// use domain_guard::error::ValidationError;
/// use domain_guard::value_object;
/// use domain_guard::value_objects::ValueObject;
///
/// value_object! {
///     /// A non-empty room name.
///     pub struct RoomName(String);
///
///     validate(name) {
///         if name.trim().is_empty() {
///             return Err(ValidationError::Empty { type_name: "RoomName" });
///         }
///         Ok(())
///     }
/// }
///
/// let room = RoomName::create("Blue".to_string()).unwrap();
/// assert_eq!(room.to_string(), "Blue");
/// assert!(!RoomName::is_valid("  ".to_string()));
/// ```
#[macro_export]
macro_rules! value_object {
    (@define [$(#[$meta:meta])*] $vis:vis $name:ident $inner:ty { $($hook:tt)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name($inner);

        impl $crate::value_objects::ValueObject for $name {
            type Value = $inner;

            fn from_value_unchecked(
                value: $inner,
                _gate: $crate::value_objects::ConstructionGate,
            ) -> Self {
                Self(value)
            }

            fn value(&self) -> &$inner {
                &self.0
            }

            fn into_value(self) -> $inner {
                self.0
            }

            fn type_name() -> &'static str {
                stringify!($name)
            }

            $($hook)*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::convert::AsRef<$inner> for $name {
            fn as_ref(&self) -> &$inner {
                &self.0
            }
        }

        impl ::std::convert::TryFrom<$inner> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(value: $inner) -> $crate::error::ValidationResult<Self> {
                <Self as $crate::value_objects::ValueObject>::create(value)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$inner as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::value_objects::ValueObject>::create(value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($inner:ty);
    ) => {
        $crate::value_object!(@define [$(#[$meta])*] $vis $name $inner {});
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($inner:ty);

        validate($value:ident) $body:block
    ) => {
        $crate::value_object!(@define [$(#[$meta])*] $vis $name $inner {
            fn validate(&self) -> $crate::error::ValidationResult<()> {
                let $value: &$inner = &self.0;
                $body
            }
        });
    };
}
