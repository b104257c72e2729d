//! The schema model: root operation types plus one lookup table per kind.

use std::collections::BTreeMap;

use strum::{Display, EnumString};

use crate::definitions::{
    EnumDefinition, InputTypeDefinition, InterfaceDefinition, ScalarDefinition, TypeDefinition,
    UnionDefinition,
};
use crate::errors::SchemaParseError;

/// Scalars every schema has, whether or not the document declares them.
pub const BUILT_IN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// The lookup table a type name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Enum,
    Union,
    Scalar,
}

impl TypeKind {
    /// Whether values of this kind carry a selection set.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }
}

/// A parsed schema.
///
/// Built once per generation run by [`parse_schema`](crate::parse_schema) and
/// shared read-only afterwards. Tables are sorted by name so every iteration
/// over the model is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    pub query_type_name: String,
    pub mutation_type_name: Option<String>,
    pub subscription_type_name: Option<String>,
    pub objects: BTreeMap<String, TypeDefinition>,
    pub interfaces: BTreeMap<String, InterfaceDefinition>,
    pub inputs: BTreeMap<String, InputTypeDefinition>,
    pub enums: BTreeMap<String, EnumDefinition>,
    pub unions: BTreeMap<String, UnionDefinition>,
    pub scalars: BTreeMap<String, ScalarDefinition>,
}

impl SchemaModel {
    /// Creates an empty model with the given query root type name.
    pub fn new(query_type_name: impl Into<String>) -> Self {
        Self {
            query_type_name: query_type_name.into(),
            ..Default::default()
        }
    }

    /// Returns which table `name` lives in. Built-in scalars report
    /// [`TypeKind::Scalar`] even though they are not stored.
    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        if self.objects.contains_key(name) {
            Some(TypeKind::Object)
        } else if self.interfaces.contains_key(name) {
            Some(TypeKind::Interface)
        } else if self.inputs.contains_key(name) {
            Some(TypeKind::InputObject)
        } else if self.enums.contains_key(name) {
            Some(TypeKind::Enum)
        } else if self.unions.contains_key(name) {
            Some(TypeKind::Union)
        } else if self.scalars.contains_key(name) || BUILT_IN_SCALARS.contains(&name) {
            Some(TypeKind::Scalar)
        } else {
            None
        }
    }

    /// The query root object type, if the document defines it.
    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.objects.get(&self.query_type_name)
    }

    /// The mutation root object type, if declared and defined.
    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.mutation_type_name
            .as_ref()
            .and_then(|name| self.objects.get(name))
    }

    /// The subscription root object type, if declared and defined.
    pub fn subscription_type(&self) -> Option<&TypeDefinition> {
        self.subscription_type_name
            .as_ref()
            .and_then(|name| self.objects.get(name))
    }

    /// Whether `name` is one of the root operation types.
    pub fn is_root_type(&self, name: &str) -> bool {
        self.query_type_name == name
            || self.mutation_type_name.as_deref() == Some(name)
            || self.subscription_type_name.as_deref() == Some(name)
    }

    /// Object types that are data shapes rather than operation namespaces.
    pub fn data_objects(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.objects
            .values()
            .filter(|object| !self.is_root_type(&object.name))
    }

    /// Names of every union listing `type_name` as a member, sorted.
    pub fn unions_containing(&self, type_name: &str) -> Vec<&str> {
        self.unions
            .values()
            .filter(|union| union.members.iter().any(|member| member == type_name))
            .map(|union| union.name.as_str())
            .collect()
    }

    /// Total number of types across every table.
    pub fn type_count(&self) -> usize {
        self.objects.len()
            + self.interfaces.len()
            + self.inputs.len()
            + self.enums.len()
            + self.unions.len()
            + self.scalars.len()
    }

    fn ensure_unique(&self, name: &str) -> Result<(), SchemaParseError> {
        let declared = self.kind_of(name).is_some() && !BUILT_IN_SCALARS.contains(&name);
        if declared {
            return Err(SchemaParseError::DuplicateType {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn insert_object(&mut self, def: TypeDefinition) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.objects.insert(def.name.clone(), def);
        Ok(())
    }

    pub(crate) fn insert_interface(
        &mut self,
        def: InterfaceDefinition,
    ) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.interfaces.insert(def.name.clone(), def);
        Ok(())
    }

    pub(crate) fn insert_input(&mut self, def: InputTypeDefinition) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.inputs.insert(def.name.clone(), def);
        Ok(())
    }

    pub(crate) fn insert_enum(&mut self, def: EnumDefinition) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.enums.insert(def.name.clone(), def);
        Ok(())
    }

    pub(crate) fn insert_union(&mut self, def: UnionDefinition) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.unions.insert(def.name.clone(), def);
        Ok(())
    }

    pub(crate) fn insert_scalar(&mut self, def: ScalarDefinition) -> Result<(), SchemaParseError> {
        self.ensure_unique(&def.name)?;
        self.scalars.insert(def.name.clone(), def);
        Ok(())
    }
}
