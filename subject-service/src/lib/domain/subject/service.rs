use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::PasswordError;

use crate::subject::errors::CredentialError;
use crate::subject::errors::SubjectError;
use crate::subject::models::RegisterSubjectCommand;
use crate::subject::models::RollNumber;
use crate::subject::models::Subject;
use crate::subject::models::SubjectChanges;
use crate::subject::models::SubjectClaims;
use crate::subject::models::UpdateSubjectCommand;
use crate::subject::ports::SubjectRepository;
use crate::subject::ports::SubjectServicePort;

/// Domain service implementation for subject record operations.
pub struct SubjectService<SR>
where
    SR: SubjectRepository,
{
    repository: Arc<SR>,
    authenticator: Arc<Authenticator>,
}

impl<SR> SubjectService<SR>
where
    SR: SubjectRepository,
{
    /// Create a new subject service.
    ///
    /// # Arguments
    /// * `repository` - Record store implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<SR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Hash on the blocking pool, off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, SubjectError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
            .map_err(SubjectError::from)
    }
}

#[async_trait]
impl<SR> SubjectServicePort for SubjectService<SR>
where
    SR: SubjectRepository,
{
    async fn register(&self, command: RegisterSubjectCommand) -> Result<Subject, SubjectError> {
        let roll_number = command.roll_number;

        if self
            .repository
            .find_by_roll_number(roll_number)
            .await?
            .is_some()
        {
            tracing::debug!(rollno = %roll_number, "Registration rejected, roll number taken");
            return Err(SubjectError::RollNumberAlreadyExists(roll_number));
        }

        let subject = Subject {
            roll_number,
            name: command.name,
            password_hash: self.hash_password(command.password).await?,
            tamil: command.tamil,
            english: command.english,
            maths: command.maths,
        };

        // A concurrent registration can still win the race; the store's
        // constraint turns it into RollNumberAlreadyExists.
        let registered = self.repository.create(subject).await?;

        tracing::info!(rollno = %registered.roll_number, "Subject registered");
        Ok(registered)
    }

    async fn login(&self, roll_number: RollNumber, password: &str) -> Result<String, SubjectError> {
        let subject = self
            .repository
            .find_by_roll_number(roll_number)
            .await?
            .ok_or(CredentialError::UnknownRollNumber)?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_owned();
        let claims = SubjectClaims::for_subject(roll_number);

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &subject.password_hash, claims)
        })
        .await
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                SubjectError::from(CredentialError::WrongPassword)
            }
            // Records inserted through create_subject hold raw passwords,
            // which never match.
            AuthenticationError::PasswordError(PasswordError::MalformedHash(reason)) => {
                tracing::warn!(rollno = %roll_number, %reason, "Stored password is not a hash");
                SubjectError::from(CredentialError::WrongPassword)
            }
            AuthenticationError::PasswordError(err) => SubjectError::from(err),
            AuthenticationError::TokenError(err) => SubjectError::from(err),
        })?;

        tracing::info!(rollno = %roll_number, "Subject logged in");
        Ok(result.access_token)
    }

    async fn create_subject(&self, subject: Subject) -> Result<Subject, SubjectError> {
        self.repository.create(subject).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectError> {
        self.repository.list_all().await
    }

    async fn get_subject(&self, roll_number: RollNumber) -> Result<Subject, SubjectError> {
        self.repository
            .find_by_roll_number(roll_number)
            .await?
            .ok_or(SubjectError::NotFound(roll_number))
    }

    async fn update_subject(
        &self,
        roll_number: RollNumber,
        command: UpdateSubjectCommand,
    ) -> Result<Subject, SubjectError> {
        let password_hash = match command.password.filter(|password| !password.is_empty()) {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let changes = SubjectChanges {
            name: command.name,
            password_hash,
            tamil: command.tamil,
            english: command.english,
            maths: command.maths,
        };

        let updated = self
            .repository
            .update(roll_number, changes)
            .await?
            .ok_or(SubjectError::NotFound(roll_number))?;

        tracing::info!(rollno = %roll_number, "Subject updated");
        Ok(updated)
    }

    async fn delete_subject(&self, roll_number: RollNumber) -> Result<Subject, SubjectError> {
        let deleted = self
            .repository
            .delete(roll_number)
            .await?
            .ok_or(SubjectError::NotFound(roll_number))?;

        tracing::info!(rollno = %roll_number, "Subject deleted");
        Ok(deleted)
    }
}
