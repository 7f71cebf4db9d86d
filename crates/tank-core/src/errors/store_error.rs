/// Item store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("tracked item not found: {id}")]
    ItemNotFound { id: String },

    #[error("subject already registered: {subject_id}")]
    AlreadyRegistered { subject_id: String },
}
