//! Type descriptors, converters and the registries that resolve them.
//!
//! The mapping layer sees three kinds of types:
//!
//! - [`Type`](crate::stmt::Type): the identity of an in-memory value type.
//! - [`JdbcType`]: the type a result column or bind parameter has on the wire.
//! - [`BasicType`]: a pairing of the two, used to extract and bind values.
//!
//! A [`JavaTypeDescriptor`] describes one `Type` and is looked up through the
//! [`TypeConfiguration`]. Converters are resolved through the
//! [`BeanRegistry`].

mod bean;
pub use bean::{BeanRegistry, ManagedBean};

mod basic_type;
pub use basic_type::{BasicType, JdbcMapping};

mod configuration;
pub use configuration::{TypeConfiguration, TypeConfigurationBuilder};

mod converter;
pub use converter::{AttributeConverter, BasicValueConverter, ConverterClass, ConverterImpl};

mod descriptor;
pub use descriptor::JavaTypeDescriptor;

mod jdbc_type;
pub use jdbc_type::JdbcType;
