//! Add-on manifest

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub resources: &'static [&'static str],
    pub types: &'static [&'static str],
    pub id_prefixes: &'static [&'static str],
}

pub const MANIFEST: Manifest = Manifest {
    id: "yodaluca23.tomato.trailers",
    name: "Rotten Tomatoes Trailers",
    author: "yodaluca23",
    version: "1.0.0",
    description: "Get Trailers from Rotten Tomatoes.",
    resources: &["meta"],
    types: &["movie", "series"],
    id_prefixes: &["tt"],
};
