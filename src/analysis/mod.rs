pub mod metric;
pub mod path;
pub mod validation;

pub use metric::Metric;
pub use path::{find_path, path_score, path_time_hours, AttackPath, PathSummary};
pub use validation::{validate_tree, TreeIssue};
