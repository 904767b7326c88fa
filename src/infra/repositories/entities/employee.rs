//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Employee, Salary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub surname: String,
    pub salutation: String,
    pub profile_color: String,
    pub fullname: String,
    pub salary: f64,
    pub employeenumber: String,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: Some(model.id),
            firstname: model.firstname,
            surname: model.surname,
            fullname: model.fullname,
            salutation: model.salutation,
            gender: model.gender,
            employeenumber: model.employeenumber,
            profile_color: model.profile_color,
            salary: Some(Salary::Amount(model.salary)),
        }
    }
}

/// Copy the eight business fields onto an active model; `id` is left untouched.
pub fn apply_fields(active: &mut ActiveModel, employee: &Employee) {
    active.firstname = Set(employee.firstname.clone());
    active.surname = Set(employee.surname.clone());
    active.salutation = Set(employee.salutation.clone());
    active.profile_color = Set(employee.profile_color.clone());
    active.fullname = Set(employee.fullname.clone());
    active.salary = Set(employee.salary_amount());
    active.employeenumber = Set(employee.employeenumber.clone());
    active.gender = Set(employee.gender.clone());
}
