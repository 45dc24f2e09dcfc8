//! Database Seeding
//!
//! Inserts the editorial baseline (countries and resource categories) on
//! first startup. Idempotent: tables that already contain rows are left
//! untouched.

use sqlx::PgPool;

use crate::catalog::db::{
    create_country, create_resource_category, get_countries, get_resource_categories,
    InsertCountry, InsertResourceCategory,
};

fn sample_countries() -> Vec<InsertCountry> {
    let countries = [
        (
            "España",
            "es",
            "https://images.unsplash.com/photo-1543783207-ec64e4d95325?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Información sobre el sistema de asilo español, permisos de residencia y trabajo, homologación de títulos y más.",
        ),
        (
            "Colombia",
            "co",
            "https://images.unsplash.com/photo-1518638150340-f706e86654de?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Guía sobre el Permiso Especial de Permanencia (PEP), acceso a servicios, trámites para migrantes venezolanos y más.",
        ),
        (
            "Chile",
            "cl",
            "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Información sobre visas de residencia, sistema de salud, educación y programas de apoyo a migrantes.",
        ),
        (
            "México",
            "mx",
            "https://images.unsplash.com/photo-1547995886-6dc09384c6e6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Guía sobre trámites migratorios, programas de integración, opciones de empleo y acceso a servicios públicos.",
        ),
        (
            "Argentina",
            "ar",
            "https://images.unsplash.com/photo-1589909202802-8f4aadce1849?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Información sobre el proceso de residencia, convalidación de estudios, sistema de salud y derechos laborales.",
        ),
        (
            "Estados Unidos",
            "us",
            "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Requisitos de visas, procesos de asilo político, recursos para migrantes y comunidades de apoyo.",
        ),
    ];

    countries
        .into_iter()
        .map(|(name, flag_code, image_url, description)| InsertCountry {
            name: name.to_string(),
            flag_url: format!("https://flagicons.lipis.dev/flags/4x3/{flag_code}.svg"),
            image_url: image_url.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn sample_resource_categories() -> Vec<InsertResourceCategory> {
    let categories = [
        ("Legal", "scale", "Información sobre visas, permisos, asilo y documentación."),
        ("Trabajo", "briefcase", "Recursos sobre empleo, derechos laborales y emprendimiento."),
        ("Salud", "heart", "Guías sobre acceso a servicios médicos y salud mental."),
        ("Educación", "graduation-cap", "Información sobre estudios, validación de títulos y becas."),
        ("Vivienda", "home", "Recursos para encontrar alojamiento y conocer tus derechos."),
        ("Integración", "users", "Información sobre comunidades y programas de adaptación cultural."),
    ];

    categories
        .into_iter()
        .map(|(name, icon, description)| InsertResourceCategory {
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Seed countries and resource categories if their tables are empty.
pub async fn seed_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let existing_countries = get_countries(pool).await?;
    if existing_countries.is_empty() {
        let countries = sample_countries();
        for country in &countries {
            create_country(pool, country).await?;
        }
        tracing::info!("seeded {} countries", countries.len());
    } else {
        tracing::info!(
            "{} countries already present, skipping country seed",
            existing_countries.len()
        );
    }

    let existing_categories = get_resource_categories(pool).await?;
    if existing_categories.is_empty() {
        let categories = sample_resource_categories();
        for category in &categories {
            create_resource_category(pool, category).await?;
        }
        tracing::info!("seeded {} resource categories", categories.len());
    } else {
        tracing::info!(
            "{} resource categories already present, skipping category seed",
            existing_categories.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_well_formed() {
        let countries = sample_countries();
        assert_eq!(countries.len(), 6);
        assert!(countries.iter().all(|c| c.flag_url.ends_with(".svg")));
        assert!(countries.iter().all(|c| !c.description.is_empty()));

        let categories = sample_resource_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| !c.icon.is_empty()));
    }
}
