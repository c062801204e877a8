use sea_orm::entity::prelude::*;

use crate::value::IdList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nome: String,
    #[sea_orm(unique)]
    pub codice: String,
    pub ore_totali: i32,
    pub descrizione: String,
    pub studenti_ids: IdList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
