mod comment;

pub use comment::{is_report_comment, plan_upsert, CommentUpserter, IssueComment, UpsertAction};
