//! Field names shared by every indexed document, independent of the
//! resource properties a bond can constrain.

/// Engine metadata field naming the index a document lives in.
pub const INDEX: &str = "_index";

pub const DATABASE_ID: &str = "databaseId";
pub const FOLDER_NAME: &str = "folderName";

// meta-folder documents
pub const DATA_FOLDER: &str = "dataFolder";
pub const SOURCE_ID: &str = "sourceId";

// view documents
pub const VIEW_CREATOR: &str = "viewCreator";
pub const VIEW_OWNER: &str = "viewOwner";
pub const VIEW_VISIBILITY: &str = "viewVisibility";
