mod local_store;
mod store_factory;

pub use local_store::LocalStagingStore;
pub use store_factory::StagingStoreFactory;
