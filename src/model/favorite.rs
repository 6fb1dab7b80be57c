use serde::{Deserialize, Serialize};

/// A user's favorite countries, sorted by code
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FavoritesDto {
    /// cca3 codes
    pub favorites: Vec<String>,
}
