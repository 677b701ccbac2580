use diesel::prelude::*;
use serde::Serialize;
use crate::schema::applications;

#[derive(Queryable, Selectable, Insertable, Serialize, Clone, Debug, PartialEq)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Application {
    pub student_id: String, // primary key, one application per student
    pub name: String,
    pub dept: String,
    pub phone: String,
    pub interest: String, // area of interest picked in the form, e.g. "AI"
    pub message: String,
    pub submitted_at: i64, // unix seconds, assigned by the server on write
}
