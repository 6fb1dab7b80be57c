pub use sea_orm_migration::prelude::*;

mod m20251101_000001_atlas_user;
mod m20251101_000002_atlas_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_atlas_user::Migration),
            Box::new(m20251101_000002_atlas_favorite::Migration),
        ]
    }
}
