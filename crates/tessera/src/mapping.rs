mod discriminator;
pub use discriminator::{DiscriminatorMapping, DiscriminatorSelectable};

mod discriminator_type;
pub use discriminator_type::DiscriminatorType;

mod entity;
pub use entity::{DiscriminatorValue, EntityDescriptor, EntityDescriptorBuilder};

mod role;
pub use role::NavigableRole;
