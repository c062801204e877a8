use sea_orm::DatabaseConnection;

use crate::server::{
    data::module::ModuleRepository,
    error::AppError,
    model::{
        identity::RecordId,
        module::{Module, ModuleFields},
    },
    util::parse::parse_record_id,
};

const DUPLICATE_CODE: &str = "Module code already exists";

pub struct ModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all modules ordered by name
    pub async fn list(&self) -> Result<Vec<Module>, AppError> {
        Ok(ModuleRepository::new(self.db).get_all().await?)
    }

    /// Gets a module by its identity string
    pub async fn get(&self, id: &str) -> Result<Module, AppError> {
        let id = parse_record_id(id)?;

        ModuleRepository::new(self.db)
            .get_by_id(&id)
            .await?
            .ok_or_else(module_not_found)
    }

    /// Creates a module after checking its code is not already used
    pub async fn create(&self, fields: ModuleFields) -> Result<Module, AppError> {
        let repo = ModuleRepository::new(self.db);

        if repo.codice_taken(&fields.codice, None).await? {
            return Err(AppError::DuplicateValue(DUPLICATE_CODE.to_string()));
        }

        let id = RecordId::generate();
        let module = repo
            .create(&id, fields)
            .await
            .map_err(|err| AppError::from_unique_violation(err, DUPLICATE_CODE))?;

        tracing::info!(module_id = %module.id, codice = %module.codice, "Created module");

        Ok(module)
    }

    /// Updates a module's descriptive fields
    ///
    /// The code may stay the same; it only conflicts when another module uses it.
    pub async fn update(&self, id: &str, fields: ModuleFields) -> Result<Module, AppError> {
        let id = parse_record_id(id)?;
        let repo = ModuleRepository::new(self.db);

        if repo.codice_taken(&fields.codice, Some(&id)).await? {
            return Err(AppError::DuplicateValue(
                "Module code conflicts with another module".to_string(),
            ));
        }

        let module = repo
            .update(&id, fields)
            .await
            .map_err(|err| AppError::from_unique_violation(err, DUPLICATE_CODE))?
            .ok_or_else(module_not_found)?;

        tracing::info!(module_id = %module.id, "Updated module");

        Ok(module)
    }

    /// Deletes a module
    ///
    /// Students keep the module's identity in `modules_ids` and exams keep referencing it;
    /// only student deletion cascades.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_record_id(id)?;

        if ModuleRepository::new(self.db).delete(&id).await? == 0 {
            return Err(module_not_found());
        }

        tracing::info!(module_id = %id, "Deleted module");

        Ok(())
    }
}

fn module_not_found() -> AppError {
    AppError::NotFound("Module not found".to_string())
}
