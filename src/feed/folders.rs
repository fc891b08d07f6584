use crate::error::FeedFilterError;

/// One entry of the folder menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Folder {
    pub key: &'static str,
    pub stream_id: &'static str,
}

impl Folder {
    /// Last path component of the stream id, as shown in the menu.
    pub fn name(&self) -> &'static str {
        self.stream_id
            .rsplit('/')
            .next()
            .unwrap_or(self.stream_id)
    }
}

pub const FOLDERS: &[Folder] = &[
    Folder { key: "1", stream_id: "user/-/label/Global" },
    Folder { key: "2", stream_id: "user/-/label/Empresas" },
    Folder { key: "3", stream_id: "user/-/label/Vulnerabilidades/Ataques" },
    Folder { key: "4", stream_id: "user/-/label/IA" },
    Folder { key: "5", stream_id: "user/-/label/Clientes" },
    Folder { key: "6", stream_id: "user/-/label/España" },
    Folder { key: "7", stream_id: "user/-/label/LATAM Ciber" },
    Folder { key: "8", stream_id: "user/-/label/LATAM Global" },
];

/// Look a folder up by menu key or by display name (case-insensitive).
pub fn find_folder(choice: &str) -> Result<&'static Folder, FeedFilterError> {
    let choice = choice.trim();
    FOLDERS
        .iter()
        .find(|f| f.key == choice)
        .or_else(|| {
            FOLDERS
                .iter()
                .find(|f| f.name().to_lowercase() == choice.to_lowercase())
        })
        .ok_or_else(|| FeedFilterError::ConfigError(format!("Invalid folder selection '{choice}'")))
}
