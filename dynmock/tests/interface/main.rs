mod events;
mod fallible;
mod generics;
mod identity;
mod out_params;
mod properties;
mod simple_trait;
mod styles;
