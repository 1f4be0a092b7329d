use tessera_core::{
    types::{AttributeConverter, BeanRegistry, TypeConfigurationBuilder},
    TypeConfiguration,
};

use std::sync::Arc;

/// Registries shared by every statement-building pass.
///
/// Built once through [`CreationContext::builder`] and shared behind an
/// [`Arc`]. Nothing in it changes after construction.
#[derive(Debug)]
pub struct CreationContext {
    types: TypeConfiguration,
    beans: BeanRegistry,
}

#[derive(Debug)]
pub struct CreationContextBuilder {
    types: TypeConfigurationBuilder,
    beans: BeanRegistry,
}

impl CreationContext {
    pub fn builder() -> CreationContextBuilder {
        CreationContextBuilder {
            types: TypeConfiguration::builder(),
            beans: BeanRegistry::default(),
        }
    }

    pub fn types(&self) -> &TypeConfiguration {
        &self.types
    }

    pub fn beans(&self) -> &BeanRegistry {
        &self.beans
    }
}

impl Default for CreationContext {
    fn default() -> Self {
        Self {
            types: TypeConfiguration::default(),
            beans: BeanRegistry::default(),
        }
    }
}

impl CreationContextBuilder {
    /// Registers `T` as a domain type converters may produce.
    pub fn register_object<T: ?Sized + 'static>(&mut self) -> &mut Self {
        self.types.register_object::<T>();
        self
    }

    /// Registers a converter bean, resolvable afterwards by its class.
    pub fn register_converter<C: AttributeConverter>(&mut self, converter: C) -> &mut Self {
        self.beans.register(converter);
        self
    }

    pub fn register_default_converter<C: AttributeConverter + Default>(&mut self) -> &mut Self {
        self.beans.register_default::<C>();
        self
    }

    pub fn build(self) -> Arc<CreationContext> {
        let context = CreationContext {
            types: self.types.build(),
            beans: self.beans,
        };

        tracing::debug!(beans = ?context.beans, "creation context built");
        Arc::new(context)
    }
}
