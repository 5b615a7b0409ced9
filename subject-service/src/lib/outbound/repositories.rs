pub mod subject;

pub use subject::PostgresSubjectRepository;
