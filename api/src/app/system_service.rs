//! System service
//!
//! Create and maintain buildable product systems.

use std::sync::Arc;

use crate::domain::entities::System;
use crate::domain::ports::SystemRepository;
use crate::domain::values::{Category, Color, SizeConstraints};
use crate::error::{AppError, DomainError};

/// Input for creating a system
#[derive(Debug, Clone)]
pub struct CreateSystem {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub colors: Vec<Color>,
    pub size_constraints: Option<SizeConstraints>,
}

/// Input for updating a system. Omitted fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSystem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub size_constraints: Option<SizeConstraints>,
    pub is_active: Option<bool>,
}

pub(crate) fn system_not_found(code: &str) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "System with code '{}' not found",
        code
    )))
}

/// Service for managing systems
pub struct SystemService<SR>
where
    SR: SystemRepository,
{
    systems: Arc<SR>,
}

impl<SR> SystemService<SR>
where
    SR: SystemRepository,
{
    pub fn new(systems: Arc<SR>) -> Self {
        Self { systems }
    }

    pub async fn create_system(&self, command: CreateSystem) -> Result<System, AppError> {
        if self.systems.exists_by_code(&command.code).await? {
            tracing::warn!(code = %command.code, "Rejected duplicate system code");
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "System with code '{}' already exists",
                command.code
            ))));
        }

        let mut system = System::new(
            &command.code,
            &command.name,
            command.description.as_deref().unwrap_or_default(),
            command.category,
        )?;
        if !command.colors.is_empty() {
            system = system.with_colors(command.colors);
        }
        if let Some(constraints) = command.size_constraints {
            system = system.with_size_constraints(constraints);
        }

        let system = self.systems.save(&system).await?;
        tracing::info!(code = %system.code, id = %system.id, "System created");
        Ok(system)
    }

    pub async fn update_system(&self, code: &str, command: UpdateSystem) -> Result<System, AppError> {
        let existing = self
            .systems
            .find_by_code(code)
            .await?
            .ok_or_else(|| system_not_found(code))?;

        let name = command.name.unwrap_or_else(|| existing.name.clone());
        let description = command
            .description
            .unwrap_or_else(|| existing.description.clone());

        let mut system = existing.with_updated_details(&name, &description)?;
        if let Some(colors) = command.colors {
            system = system.with_colors(colors);
        }
        if let Some(constraints) = command.size_constraints {
            system = system.with_size_constraints(constraints);
        }
        system = match command.is_active {
            Some(true) => system.activated(),
            Some(false) => system.deactivated(),
            None => system,
        };

        let system = self.systems.save(&system).await?;
        tracing::info!(code = %system.code, "System updated");
        Ok(system)
    }

    pub async fn get_system(&self, code: &str) -> Result<Option<System>, AppError> {
        Ok(self.systems.find_by_code(code).await?)
    }

    pub async fn list_systems(&self) -> Result<Vec<System>, AppError> {
        Ok(self.systems.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySystemRepository;
    use crate::test_utils::test_system;

    fn create_service(repo: InMemorySystemRepository) -> SystemService<InMemorySystemRepository> {
        SystemService::new(Arc::new(repo))
    }

    fn casement() -> CreateSystem {
        CreateSystem {
            code: "cw10".to_string(),
            name: "Casement Window".to_string(),
            description: None,
            category: Category::window(),
            colors: vec![Color::white(), Color::brown()],
            size_constraints: None,
        }
    }

    #[tokio::test]
    async fn create_system_success() {
        let service = create_service(InMemorySystemRepository::new());

        let system = service.create_system(casement()).await.unwrap();

        assert_eq!(system.code, "CW10");
        assert_eq!(system.colors.len(), 2);
        assert!(system.is_active);
        assert!(service.get_system("cw10").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn create_system_rejects_duplicate() {
        let service = create_service(InMemorySystemRepository::with_systems([test_system("CW10")]));

        let err = service.create_system(casement()).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn create_system_rejects_blank_name() {
        let service = create_service(InMemorySystemRepository::new());

        let err = service
            .create_system(CreateSystem {
                name: "".to_string(),
                ..casement()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn update_system_partial() {
        let original = test_system("WF00");
        let service = create_service(InMemorySystemRepository::with_systems([original.clone()]));

        let constraints = SizeConstraints::new(300.0, 2400.0, 300.0, 1800.0).unwrap();
        let updated = service
            .update_system(
                "wf00",
                UpdateSystem {
                    description: Some("Fixed frame".to_string()),
                    size_constraints: Some(constraints),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.description, "Fixed frame");
        assert_eq!(updated.size_constraints, Some(constraints));
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn update_system_not_found() {
        let service = create_service(InMemorySystemRepository::new());

        let err = service
            .update_system("NOPE", UpdateSystem::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "System with code 'NOPE' not found");
    }

    #[tokio::test]
    async fn list_systems() {
        let service = create_service(InMemorySystemRepository::with_systems([
            test_system("WF00"),
            test_system("DR00"),
        ]));

        assert_eq!(service.list_systems().await.unwrap().len(), 2);
    }
}
