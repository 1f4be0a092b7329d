use super::{AttributeConverter, ConverterClass};
use crate::{Error, Result};

use std::{collections::HashMap, fmt, sync::Arc};

/// A converter instance managed by the [`BeanRegistry`], or provided directly
/// by the caller.
#[derive(Clone)]
pub struct ManagedBean {
    class: ConverterClass,
    instance: Arc<dyn AttributeConverter>,
}

/// Converter beans keyed by converter class.
///
/// Beans are registered while the registry is being set up and are shared as
/// singletons afterwards.
#[derive(Default)]
pub struct BeanRegistry {
    beans: HashMap<ConverterClass, ManagedBean>,
}

impl ManagedBean {
    /// Wraps a converter instance supplied by the caller.
    pub fn provided<C: AttributeConverter>(converter: C) -> Self {
        Self {
            class: ConverterClass::of::<C>(),
            instance: Arc::new(converter),
        }
    }

    pub fn class(&self) -> ConverterClass {
        self.class
    }

    pub fn instance(&self) -> &dyn AttributeConverter {
        &*self.instance
    }
}

impl fmt::Debug for ManagedBean {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ManagedBean")
            .field("class", &self.class)
            .finish()
    }
}

impl BeanRegistry {
    pub fn register<C: AttributeConverter>(&mut self, converter: C) -> &mut Self {
        let bean = ManagedBean::provided(converter);
        self.beans.insert(bean.class(), bean);
        self
    }

    pub fn register_default<C: AttributeConverter + Default>(&mut self) -> &mut Self {
        self.register(C::default())
    }

    pub fn get_bean(&self, class: ConverterClass) -> Result<ManagedBean> {
        self.beans
            .get(&class)
            .cloned()
            .ok_or_else(|| Error::unknown_converter(class.name()))
    }

    pub fn contains(&self, class: ConverterClass) -> bool {
        self.beans.contains_key(&class)
    }
}

impl fmt::Debug for BeanRegistry {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.beans.keys()).finish()
    }
}
