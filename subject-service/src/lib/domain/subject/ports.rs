use async_trait::async_trait;

use crate::subject::errors::SubjectError;
use crate::subject::models::RegisterSubjectCommand;
use crate::subject::models::RollNumber;
use crate::subject::models::Subject;
use crate::subject::models::SubjectChanges;
use crate::subject::models::UpdateSubjectCommand;

/// Port for subject record service operations.
#[async_trait]
pub trait SubjectServicePort: Send + Sync + 'static {
    /// Register a new record, hashing its password.
    ///
    /// # Errors
    /// * `RollNumberAlreadyExists` - A record with this roll number exists,
    ///   found up front or rejected by the store
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterSubjectCommand) -> Result<Subject, SubjectError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Returns
    /// Signed token whose only application claim is the roll number
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown roll number or wrong password
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, roll_number: RollNumber, password: &str) -> Result<String, SubjectError>;

    /// Persist a record exactly as supplied.
    ///
    /// The password is stored without hashing and no existence check runs
    /// before the insert.
    ///
    /// # Errors
    /// * `RollNumberAlreadyExists` - Store rejected a duplicate roll number
    /// * `DatabaseError` - Database operation failed
    async fn create_subject(&self, subject: Subject) -> Result<Subject, SubjectError>;

    /// Retrieve every record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectError>;

    /// Retrieve a record by roll number.
    ///
    /// # Errors
    /// * `NotFound` - No record for this roll number
    /// * `DatabaseError` - Database operation failed
    async fn get_subject(&self, roll_number: RollNumber) -> Result<Subject, SubjectError>;

    /// Overwrite the supplied fields of a record.
    ///
    /// # Returns
    /// The record as stored after the update
    ///
    /// # Errors
    /// * `NotFound` - No record for this roll number
    /// * `Password` - Hashing the new password failed
    /// * `DatabaseError` - Database operation failed
    async fn update_subject(
        &self,
        roll_number: RollNumber,
        command: UpdateSubjectCommand,
    ) -> Result<Subject, SubjectError>;

    /// Remove a record.
    ///
    /// # Returns
    /// The removed record
    ///
    /// # Errors
    /// * `NotFound` - No record for this roll number
    /// * `DatabaseError` - Database operation failed
    async fn delete_subject(&self, roll_number: RollNumber) -> Result<Subject, SubjectError>;
}

/// Persistence operations for subject records.
///
/// Implementations enforce roll number uniqueness themselves.
#[async_trait]
pub trait SubjectRepository: Send + Sync + 'static {
    /// Insert a new record.
    ///
    /// # Errors
    /// * `RollNumberAlreadyExists` - Roll number is taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, subject: Subject) -> Result<Subject, SubjectError>;

    /// Retrieve a record by roll number, `None` if absent.
    async fn find_by_roll_number(
        &self,
        roll_number: RollNumber,
    ) -> Result<Option<Subject>, SubjectError>;

    /// Retrieve all records.
    async fn list_all(&self) -> Result<Vec<Subject>, SubjectError>;

    /// Apply `changes` to the record in one write and return the new state,
    /// `None` if no record matched.
    async fn update(
        &self,
        roll_number: RollNumber,
        changes: SubjectChanges,
    ) -> Result<Option<Subject>, SubjectError>;

    /// Remove the record and return it, `None` if no record matched.
    async fn delete(&self, roll_number: RollNumber) -> Result<Option<Subject>, SubjectError>;
}
