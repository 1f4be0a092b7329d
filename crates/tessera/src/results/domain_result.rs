use crate::{
    mapping::{DiscriminatorType, NavigableRole},
    sql_ast::NavigablePath,
};

use tessera_core::{
    stmt::{Type, Value},
    types::{BasicType, BasicValueConverter, ConverterImpl},
    Error, Result,
};

/// Turns the raw value read from a column into the value a result exposes.
#[derive(Debug, Clone)]
pub enum ValueAssembler {
    /// The column value as read.
    Basic(BasicType),

    /// The column value passed through an attribute converter.
    Converted(ConverterImpl),

    /// The name of the entity a discriminator value identifies.
    Discriminator(DiscriminatorType),
}

/// A single scalar value of each row.
#[derive(Debug, Clone)]
pub struct BasicResult {
    values_array_position: usize,
    result_variable: Option<String>,
    java_type: Type,
    assembler: ValueAssembler,
}

/// When the value of a fetch is loaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FetchTiming {
    Immediate,
    Delayed,
}

/// The result a fetch belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchParent {
    navigable_path: NavigablePath,
}

/// A scalar attribute loaded as part of its parent's result.
#[derive(Debug, Clone)]
pub struct BasicFetch {
    values_array_position: usize,
    fetch_parent: NavigablePath,
    fetchable_path: NavigablePath,
    fetched_role: NavigableRole,
    timing: FetchTiming,
    selected: bool,
    result_variable: Option<String>,
    assembler: ValueAssembler,
}

impl ValueAssembler {
    pub fn assemble(&self, raw: Value) -> Result<Value> {
        match self {
            ValueAssembler::Basic(basic_type) => basic_type.extract(raw),
            ValueAssembler::Converted(converter) => converter.to_domain_value(raw),
            ValueAssembler::Discriminator(discriminator) => discriminator.to_domain(raw),
        }
    }
}

fn read(row: &[Value], values_array_position: usize) -> Result<Value> {
    row.get(values_array_position).cloned().ok_or_else(|| {
        Error::result_mapping(format!(
            "row has {} values, no value at index {}",
            row.len(),
            values_array_position
        ))
    })
}

impl BasicResult {
    pub fn new(
        values_array_position: usize,
        result_variable: Option<String>,
        java_type: Type,
        assembler: ValueAssembler,
    ) -> Self {
        Self {
            values_array_position,
            result_variable,
            java_type,
            assembler,
        }
    }

    pub fn values_array_position(&self) -> usize {
        self.values_array_position
    }

    pub fn result_variable(&self) -> Option<&str> {
        self.result_variable.as_deref()
    }

    /// The type of the assembled value.
    pub fn java_type(&self) -> &Type {
        &self.java_type
    }

    pub fn assembler(&self) -> &ValueAssembler {
        &self.assembler
    }

    /// Reads this result's value out of one row buffer.
    pub fn assemble(&self, row: &[Value]) -> Result<Value> {
        let raw = read(row, self.values_array_position)?;
        self.assembler.assemble(raw)
    }
}

impl FetchParent {
    pub fn new(navigable_path: NavigablePath) -> Self {
        Self { navigable_path }
    }

    pub fn navigable_path(&self) -> &NavigablePath {
        &self.navigable_path
    }
}

impl BasicFetch {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        values_array_position: usize,
        fetch_parent: &FetchParent,
        fetchable_path: NavigablePath,
        fetched_role: NavigableRole,
        timing: FetchTiming,
        selected: bool,
        result_variable: Option<String>,
        assembler: ValueAssembler,
    ) -> Self {
        Self {
            values_array_position,
            fetch_parent: fetch_parent.navigable_path().clone(),
            fetchable_path,
            fetched_role,
            timing,
            selected,
            result_variable,
            assembler,
        }
    }

    pub fn values_array_position(&self) -> usize {
        self.values_array_position
    }

    pub fn fetch_parent_path(&self) -> &NavigablePath {
        &self.fetch_parent
    }

    pub fn navigable_path(&self) -> &NavigablePath {
        &self.fetchable_path
    }

    /// Role of the mapping being fetched.
    pub fn fetched_role(&self) -> &NavigableRole {
        &self.fetched_role
    }

    pub fn timing(&self) -> FetchTiming {
        self.timing
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn result_variable(&self) -> Option<&str> {
        self.result_variable.as_deref()
    }

    pub fn assemble(&self, row: &[Value]) -> Result<Value> {
        let raw = read(row, self.values_array_position)?;
        self.assembler.assemble(raw)
    }
}
