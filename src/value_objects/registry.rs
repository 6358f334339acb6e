//! Runtime registry of value object constructors.
//!
//! Construction functions are normally reached statically through
//! [`ValueObject`]. When the concrete type is only known at runtime (for
//! example, a field type named in configuration), the registry maps a type
//! name to a constructor that decodes JSON into the raw value and runs the
//! validation gate.
//!
//! Build the registry once at startup and share it read-only afterwards. All
//! lookups take `&self`.
//!
//! Names are the short names from [`ValueObject::type_name`], so two types
//! with the same name in different modules cannot both be registered. The
//! second registration is refused with [`ValidationError::DuplicateType`].

use super::value_object_trait::ValueObject;
use crate::error::{Valid, ValidationError, ValidationResult};
use log::{debug, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

/// A constructor that can be registered under a type name.
pub trait ValueObjectConstructor: Send + Sync {
    /// Name the constructor is registered under
    fn type_name(&self) -> &'static str;

    /// Identity of the type this constructor produces
    fn produces(&self) -> TypeId;

    /// Fully qualified name of the produced type, for diagnostics
    fn produces_name(&self) -> &'static str;

    /// Decode `value` and construct a validated instance
    fn construct(&self, value: &Value) -> ValidationResult<Box<dyn Any + Send + Sync>>;

    /// Decode `value` and only confirm validity
    fn check(&self, value: &Value) -> ValidationResult<Valid> {
        self.construct(value).map(|_| Valid)
    }
}

/// Constructor for any [`ValueObject`] whose raw value deserializes from JSON.
pub struct GenericValueObjectConstructor<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> GenericValueObjectConstructor<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for GenericValueObjectConstructor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueObjectConstructor for GenericValueObjectConstructor<T>
where
    T: ValueObject + Send + Sync + 'static,
    T::Value: DeserializeOwned,
{
    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn produces(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn produces_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn construct(&self, value: &Value) -> ValidationResult<Box<dyn Any + Send + Sync>> {
        let raw = <T::Value as Deserialize>::deserialize(value)?;
        T::create(raw).map(|object| Box::new(object) as Box<dyn Any + Send + Sync>)
    }

    fn check(&self, value: &Value) -> ValidationResult<Valid> {
        let raw = <T::Value as Deserialize>::deserialize(value)?;
        T::check(raw)
    }
}

/// Registry mapping type names to constructors.
#[derive(Default)]
pub struct ValueObjectRegistry {
    constructors: HashMap<&'static str, Box<dyn ValueObjectConstructor>>,
}

impl ValueObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under [`ValueObject::type_name`].
    ///
    /// Registering the same type twice is a no-op. A different type with the
    /// same name is refused.
    pub fn register<T>(&mut self) -> ValidationResult<&mut Self>
    where
        T: ValueObject + Send + Sync + 'static,
        T::Value: DeserializeOwned,
    {
        self.register_constructor(Box::new(GenericValueObjectConstructor::<T>::new()))
    }

    /// Builder form of [`register`](Self::register)
    pub fn with<T>(mut self) -> ValidationResult<Self>
    where
        T: ValueObject + Send + Sync + 'static,
        T::Value: DeserializeOwned,
    {
        self.register::<T>()?;
        Ok(self)
    }

    /// Register a custom constructor
    pub fn register_constructor(
        &mut self,
        constructor: Box<dyn ValueObjectConstructor>,
    ) -> ValidationResult<&mut Self> {
        let name = constructor.type_name();
        if let Some(existing) = self.constructors.get(name) {
            if existing.produces() != constructor.produces() {
                warn!(
                    "Refused {} as '{}': already registered by {}",
                    constructor.produces_name(),
                    name,
                    existing.produces_name()
                );
                return Err(ValidationError::DuplicateType {
                    type_name: name,
                    existing: existing.produces_name(),
                });
            }
            debug!("Value object constructor for {} already registered", name);
            return Ok(self);
        }

        self.constructors.insert(name, constructor);
        debug!("Registered value object constructor for {}", name);
        Ok(self)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type names in sorted order
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Construct the named type from JSON as a type-erased box.
    pub fn construct_json(
        &self,
        type_name: &str,
        value: &Value,
    ) -> ValidationResult<Box<dyn Any + Send + Sync>> {
        self.lookup(type_name)?.construct(value)
    }

    /// Confirm that `value` is valid for the named type.
    pub fn validate_json(&self, type_name: &str, value: &Value) -> ValidationResult<Valid> {
        self.lookup(type_name)?.check(value)
    }

    /// Construct `T` from JSON through its registered constructor.
    ///
    /// Fails with [`ValidationError::UnknownType`] when the name is taken by
    /// some other type.
    pub fn construct<T>(&self, value: &Value) -> ValidationResult<T>
    where
        T: ValueObject + 'static,
    {
        let constructor = self.lookup(T::type_name())?;
        if constructor.produces() != TypeId::of::<T>() {
            return Err(ValidationError::UnknownType {
                type_name: std::any::type_name::<T>().to_string(),
            });
        }

        let boxed = constructor.construct(value)?;
        boxed.downcast::<T>().map(|object| *object).map_err(|_| {
            ValidationError::construction_fault(
                T::type_name(),
                "registered constructor produced a different type",
            )
        })
    }

    fn lookup(&self, type_name: &str) -> ValidationResult<&dyn ValueObjectConstructor> {
        self.constructors
            .get(type_name)
            .map(|constructor| constructor.as_ref())
            .ok_or_else(|| ValidationError::UnknownType {
                type_name: type_name.to_string(),
            })
    }
}
