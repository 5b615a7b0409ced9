use async_trait::async_trait;
use sqlx::PgPool;

use crate::subject::errors::SubjectError;
use crate::subject::models::RollNumber;
use crate::subject::models::Subject;
use crate::subject::models::SubjectChanges;
use crate::subject::ports::SubjectRepository;

pub struct PostgresSubjectRepository {
    pool: PgPool,
}

impl PostgresSubjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SubjectRow {
    rollno: i64,
    name: String,
    password_hash: String,
    tamil: f64,
    english: f64,
    maths: f64,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Self {
            roll_number: RollNumber(row.rollno),
            name: row.name,
            password_hash: row.password_hash,
            tamil: row.tamil,
            english: row.english,
            maths: row.maths,
        }
    }
}

#[async_trait]
impl SubjectRepository for PostgresSubjectRepository {
    async fn create(&self, subject: Subject) -> Result<Subject, SubjectError> {
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            INSERT INTO subjects (rollno, name, password_hash, tamil, english, maths)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING rollno, name, password_hash, tamil, english, maths
            "#,
        )
        .bind(subject.roll_number.value())
        .bind(&subject.name)
        .bind(&subject.password_hash)
        .bind(subject.tamil)
        .bind(subject.english)
        .bind(subject.maths)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return SubjectError::RollNumberAlreadyExists(subject.roll_number);
                }
            }
            SubjectError::from(e)
        })?;

        Ok(row.into())
    }

    async fn find_by_roll_number(
        &self,
        roll_number: RollNumber,
    ) -> Result<Option<Subject>, SubjectError> {
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            SELECT rollno, name, password_hash, tamil, english, maths
            FROM subjects
            WHERE rollno = $1
            "#,
        )
        .bind(roll_number.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subject::from))
    }

    async fn list_all(&self) -> Result<Vec<Subject>, SubjectError> {
        let rows = sqlx::query_as::<_, SubjectRow>(
            r#"
            SELECT rollno, name, password_hash, tamil, english, maths
            FROM subjects
            ORDER BY rollno
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Subject::from).collect())
    }

    async fn update(
        &self,
        roll_number: RollNumber,
        changes: SubjectChanges,
    ) -> Result<Option<Subject>, SubjectError> {
        // Absent fields keep their stored value.
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            UPDATE subjects
            SET name = COALESCE($2, name),
                password_hash = COALESCE($3, password_hash),
                tamil = COALESCE($4, tamil),
                english = COALESCE($5, english),
                maths = COALESCE($6, maths)
            WHERE rollno = $1
            RETURNING rollno, name, password_hash, tamil, english, maths
            "#,
        )
        .bind(roll_number.value())
        .bind(changes.name)
        .bind(changes.password_hash)
        .bind(changes.tamil)
        .bind(changes.english)
        .bind(changes.maths)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subject::from))
    }

    async fn delete(&self, roll_number: RollNumber) -> Result<Option<Subject>, SubjectError> {
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            DELETE FROM subjects
            WHERE rollno = $1
            RETURNING rollno, name, password_hash, tamil, english, maths
            "#,
        )
        .bind(roll_number.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subject::from))
    }
}
