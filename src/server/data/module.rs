use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    identity::RecordId,
    module::{Module, ModuleFields},
};

/// Repository providing database operations for modules.
pub struct ModuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleRepository<'a> {
    /// Creates a new ModuleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new module with an empty enrollment list.
    ///
    /// # Arguments
    /// - `id` - Identity to store the module under
    /// - `fields` - Validated descriptive fields
    ///
    /// # Returns
    /// - `Ok(Module)` - The created module
    /// - `Err(DbErr)` - Database error, including a UNIQUE violation on `codice`
    pub async fn create(&self, id: &RecordId, fields: ModuleFields) -> Result<Module, DbErr> {
        let entity = entity::module::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            nome: ActiveValue::Set(fields.nome),
            codice: ActiveValue::Set(fields.codice),
            ore_totali: ActiveValue::Set(fields.ore_totali),
            descrizione: ActiveValue::Set(fields.descrizione),
            studenti_ids: ActiveValue::Set(Default::default()),
        }
        .insert(self.db)
        .await?;

        Ok(Module::from_entity(entity))
    }

    /// Gets a module by ID.
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<Module>, DbErr> {
        let entity = entity::prelude::Module::find_by_id(id.as_str())
            .one(self.db)
            .await?;

        Ok(entity.map(Module::from_entity))
    }

    /// Gets all modules ordered by name ascending.
    pub async fn get_all(&self) -> Result<Vec<Module>, DbErr> {
        let entities = entity::prelude::Module::find()
            .order_by_asc(entity::module::Column::Nome)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Module::from_entity).collect())
    }

    /// Updates a module's descriptive fields, leaving its enrollment list untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Module))` - The updated module
    /// - `Ok(None)` - No module exists with the specified ID
    /// - `Err(DbErr)` - Database error, including a UNIQUE violation on `codice`
    pub async fn update(&self, id: &RecordId, fields: ModuleFields) -> Result<Option<Module>, DbErr> {
        let Some(module) = entity::prelude::Module::find_by_id(id.as_str())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::module::ActiveModel = module.into();
        active_model.nome = ActiveValue::Set(fields.nome);
        active_model.codice = ActiveValue::Set(fields.codice);
        active_model.ore_totali = ActiveValue::Set(fields.ore_totali);
        active_model.descrizione = ActiveValue::Set(fields.descrizione);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Module::from_entity(entity)))
    }

    /// Deletes a module.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when the module didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: &RecordId) -> Result<u64, DbErr> {
        let result = entity::prelude::Module::delete_by_id(id.as_str())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a module with the given ID exists.
    pub async fn exists(&self, id: &RecordId) -> Result<bool, DbErr> {
        let count = entity::prelude::Module::find_by_id(id.as_str())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another module already uses `codice`.
    ///
    /// # Arguments
    /// - `codice` - Module code to look for
    /// - `exclude` - Module to ignore, so an update keeping its own code is not a conflict
    pub async fn codice_taken(
        &self,
        codice: &str,
        exclude: Option<&RecordId>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Module::find().filter(entity::module::Column::Codice.eq(codice));

        if let Some(exclude) = exclude {
            query = query.filter(entity::module::Column::Id.ne(exclude.as_str()));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Adds a student to the module's enrollment list unless already present.
    ///
    /// The read and the write run in one transaction holding the module row, so concurrent
    /// enrollments into the same module never overwrite each other.
    ///
    /// # Returns
    /// - `Ok(true)` - The student was added
    /// - `Ok(false)` - The student was already enrolled, nothing written
    /// - `Err(DbErr::RecordNotFound)` - No module exists with the specified ID
    /// - `Err(DbErr)` - Other database error
    pub async fn add_student(
        &self,
        module_id: &RecordId,
        student_id: &RecordId,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let module = entity::prelude::Module::find_by_id(module_id.as_str())
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Module with id {} not found",
                module_id
            )))?;

        let mut studenti_ids = module.studenti_ids.clone();
        if !studenti_ids.insert(student_id.as_str()) {
            txn.commit().await?;
            return Ok(false);
        }

        let mut active_model: entity::module::ActiveModel = module.into();
        active_model.studenti_ids = ActiveValue::Set(studenti_ids);
        active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Removes a student from the enrollment list of every module that contains it.
    ///
    /// Runs in one transaction holding the scanned module rows, so an enrollment recorded
    /// concurrently on another student is not erased. Modules that never referenced the
    /// student are left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of modules that were changed
    /// - `Err(DbErr)` - Database error during the scan or an update
    pub async fn remove_student_from_all(&self, student_id: &RecordId) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let modules = entity::prelude::Module::find()
            .lock_exclusive()
            .all(&txn)
            .await?;

        let mut changed = 0;
        for module in modules {
            let mut studenti_ids = module.studenti_ids.clone();
            if !studenti_ids.remove(student_id.as_str()) {
                continue;
            }

            let mut active_model: entity::module::ActiveModel = module.into();
            active_model.studenti_ids = ActiveValue::Set(studenti_ids);
            active_model.update(&txn).await?;
            changed += 1;
        }

        txn.commit().await?;

        Ok(changed)
    }
}
