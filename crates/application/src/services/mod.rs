mod resolver_adapter;

pub use resolver_adapter::ResolverAdapter;
