//! Diesel schema for task persistence.

diesel::table! {
    /// Task records keyed by a backend-assigned serial identifier.
    tasks (id) {
        /// Backend-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description. Empty when never set.
        description -> Text,
        /// Free-form workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional assignee.
        #[max_length = 100]
        assignee -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
