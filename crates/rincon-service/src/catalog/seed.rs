//! Built-in room catalog and the seed reconciliation merge.
//!
//! The seven predefined rooms ship with the application. On every startup
//! they are merged with whatever the admin has persisted: admin overrides
//! survive, new seed data flows in, and admin-created rooms are untouched.

use rincon_core::types::RoomId;
use rincon_entity::room::{Room, RoomType};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

const WELCOME: &str = "Bebida de bienvenida a la llegada";
const CHAMPAGNE: &str = "Botella de champagne y plato de frutas en la habitación";
const BREAKFAST: &str = "Desayuno a la carta incluido";
const WIFI: &str = "WiFi gratuito";
const CANCELLATION: &str = "Cancelación gratuita";
const TRANSFER: &str = "Servicio de transporte de lujo ida y vuelta";
const FLOATING_BREAKFAST: &str = "Desayuno flotante una vez por estadía";

/// The predefined room catalog, ids 1 through 7.
pub fn built_in_rooms() -> Vec<Room> {
    let standard_description = "Tarifa totalmente flexible. Bebida de bienvenida a la llegada y \
         champagne con frutas en la habitación. Incluye desayuno a la carta, WiFi gratuito, IVA e \
         impuestos locales";
    let luxury_description = "Tarifa totalmente flexible con servicios de lujo incluidos. \
         Servicio de transporte de lujo incluido, desayuno flotante una vez por estadía, bebida \
         de bienvenida y champagne con frutas a la llegada. Incluye desayuno a la carta, WiFi \
         gratuito, IVA e impuestos locales";

    vec![
        Room {
            id: RoomId::new(1),
            name: "Suite Icónica".to_string(),
            kind: RoomType::Suite,
            number: Some("101".to_string()),
            price_per_night: 4_786_092,
            capacity: 2,
            beds: 1,
            available: true,
            description: standard_description.to_string(),
            services: tags(&["wifi", "tv", "ac", "balcony", "minibar"]),
            benefits: tags(&[WELCOME, CHAMPAGNE, BREAKFAST, WIFI, CANCELLATION]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: false,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2020/02/HighRes-35-600x400.jpg",
            ]),
        },
        Room {
            id: RoomId::new(2),
            name: "Suite Mítica".to_string(),
            kind: RoomType::Suite,
            number: Some("102".to_string()),
            price_per_night: 5_612_572,
            capacity: 2,
            beds: 1,
            available: true,
            description: standard_description.to_string(),
            services: tags(&["wifi", "tv", "ac", "balcony", "minibar"]),
            benefits: tags(&[WELCOME, CHAMPAGNE, BREAKFAST, WIFI, CANCELLATION]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: false,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2020/02/HighRes-40-600x500.jpg",
            ]),
        },
        Room {
            id: RoomId::new(3),
            name: "Suite Épica".to_string(),
            kind: RoomType::Suite,
            number: Some("103".to_string()),
            price_per_night: 6_276_414,
            capacity: 2,
            beds: 1,
            available: true,
            description: standard_description.to_string(),
            services: tags(&["wifi", "tv", "ac", "balcony", "minibar", "jacuzzi"]),
            benefits: tags(&[WELCOME, CHAMPAGNE, BREAKFAST, WIFI, CANCELLATION]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: false,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2020/02/Homepage-2-600x500.jpg",
            ]),
        },
        Room {
            id: RoomId::new(4),
            name: "Suite Majestic".to_string(),
            kind: RoomType::Suite,
            number: Some("104".to_string()),
            price_per_night: 7_002_894,
            capacity: 2,
            beds: 1,
            available: true,
            description: "Tarifa totalmente flexible con servicios de lujo incluidos. Servicio \
                 de transporte de lujo ida y vuelta, desayuno flotante una vez por estadía, \
                 bebida de bienvenida y champagne con frutas a la llegada. Incluye desayuno a la \
                 carta, WiFi gratuito, IVA e impuestos locales"
                .to_string(),
            services: tags(&[
                "wifi",
                "tv",
                "ac",
                "balcony",
                "minibar",
                "jacuzzi",
                "roomservice",
            ]),
            benefits: tags(&[
                TRANSFER,
                FLOATING_BREAKFAST,
                WELCOME,
                CHAMPAGNE,
                BREAKFAST,
                WIFI,
                CANCELLATION,
            ]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: true,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2020/02/HighRes-24-600x500.jpg",
            ]),
        },
        Room {
            id: RoomId::new(5),
            name: "Suite Element".to_string(),
            kind: RoomType::Suite,
            number: Some("105".to_string()),
            price_per_night: 8_103_339,
            capacity: 4,
            beds: 2,
            available: true,
            description: luxury_description.to_string(),
            services: tags(&[
                "wifi",
                "tv",
                "ac",
                "balcony",
                "minibar",
                "jacuzzi",
                "roomservice",
            ]),
            benefits: tags(&[
                TRANSFER,
                FLOATING_BREAKFAST,
                WELCOME,
                CHAMPAGNE,
                BREAKFAST,
                WIFI,
                CANCELLATION,
            ]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: true,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2020/02/HighRes-26-600x500.jpg",
            ]),
        },
        Room {
            id: RoomId::new(6),
            name: "La Suite Santa".to_string(),
            kind: RoomType::Suite,
            number: Some("106".to_string()),
            price_per_night: 8_861_911,
            capacity: 4,
            beds: 2,
            available: true,
            description: luxury_description.to_string(),
            services: tags(&[
                "wifi",
                "tv",
                "ac",
                "balcony",
                "minibar",
                "jacuzzi",
                "roomservice",
            ]),
            benefits: tags(&[
                TRANSFER,
                FLOATING_BREAKFAST,
                WELCOME,
                CHAMPAGNE,
                BREAKFAST,
                WIFI,
                CANCELLATION,
            ]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: true,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2019/12/HighRes-6-min-1-scaled-e1575923182587-600x500.jpg",
            ]),
        },
        Room {
            id: RoomId::new(7),
            name: "Villa One Saint".to_string(),
            kind: RoomType::Villa,
            number: Some("201".to_string()),
            price_per_night: 12_967_440,
            capacity: 2,
            beds: 1,
            available: true,
            description: "Tarifa totalmente flexible con servicios de lujo incluidos. Servicio \
                 de transporte de lujo ida y vuelta, desayuno flotante una vez por estadía, \
                 bebida de bienvenida y champagne con frutas a la llegada. Villa exclusiva con \
                 piscina privada y vistas panorámicas. Incluye desayuno a la carta, WiFi \
                 gratuito, IVA e impuestos locales"
                .to_string(),
            services: tags(&[
                "wifi",
                "tv",
                "ac",
                "balcony",
                "minibar",
                "jacuzzi",
                "roomservice",
                "safe",
            ]),
            benefits: tags(&[
                TRANSFER,
                FLOATING_BREAKFAST,
                WELCOME,
                CHAMPAGNE,
                "Piscina privada exclusiva",
                "Vistas panorámicas a la Caldera",
                BREAKFAST,
                WIFI,
                CANCELLATION,
            ]),
            flexible_rate: true,
            free_breakfast: true,
            free_cancellation: true,
            transfer_included: true,
            images: tags(&[
                "https://www.saintsuitesoia.com/wp-content/uploads/2022/06/The-One-Private-Villa-Exterior-Pool-scaled-600x500.jpg",
            ]),
        },
    ]
}

/// Reconcile the built-in catalog with the persisted one.
///
/// Existing rooms that match a seed room by **(id and name)** take the
/// fresh seed definition but keep the admin-controlled overrides:
/// `available` always, `services` and `description` when the admin left
/// them non-empty. Existing rooms with no seed counterpart were created by
/// the admin and pass through untouched. Seed rooms whose id is absent
/// from the result are appended, so a seed room deleted by the admin
/// reappears on the next pass unless another room took over its id.
pub fn merge_seed(seed: &[Room], existing: &[Room]) -> Vec<Room> {
    let mut merged: Vec<Room> = Vec::with_capacity(existing.len() + seed.len());

    for room in existing {
        match seed
            .iter()
            .find(|fresh| fresh.id == room.id && fresh.name == room.name)
        {
            Some(fresh) => {
                let mut updated = fresh.clone();
                updated.available = room.available;
                if !room.services.is_empty() {
                    updated.services = room.services.clone();
                }
                if !room.description.is_empty() {
                    updated.description = room.description.clone();
                }
                merged.push(updated);
            }
            None => merged.push(room.clone()),
        }
    }

    for fresh in seed {
        if !merged.iter().any(|room| room.id == fresh.id) {
            merged.push(fresh.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let rooms = built_in_rooms();
        assert_eq!(rooms.len(), 7);
        assert_eq!(rooms[0].name, "Suite Icónica");
        assert_eq!(rooms[6].kind, RoomType::Villa);
        assert!(rooms.iter().all(|room| room.available));
        assert!(rooms.iter().all(|room| room.flexible_rate));
    }

    #[test]
    fn test_merge_preserves_admin_overrides() {
        let seed = built_in_rooms();
        let mut existing = built_in_rooms();
        existing[0].available = false;
        existing[0].description = "Cerrada por remodelación".to_string();
        existing[0].services = tags(&["wifi"]);

        let merged = merge_seed(&seed, &existing);
        assert_eq!(merged.len(), 7);
        assert!(!merged[0].available);
        assert_eq!(merged[0].description, "Cerrada por remodelación");
        assert_eq!(merged[0].services, tags(&["wifi"]));
        // Non-overridable fields come from the fresh seed.
        assert_eq!(merged[0].price_per_night, seed[0].price_per_night);
    }

    #[test]
    fn test_merge_keeps_admin_created_rooms() {
        let seed = built_in_rooms();
        let mut existing = built_in_rooms();
        let mut custom = seed[0].clone();
        custom.id = RoomId::new(8);
        custom.name = "Habitación Jardín".to_string();
        existing.push(custom);

        let merged = merge_seed(&seed, &existing);
        assert_eq!(merged.len(), 8);
        assert!(merged.iter().any(|room| room.name == "Habitación Jardín"));
    }

    #[test]
    fn test_merge_restores_deleted_seed_room() {
        let seed = built_in_rooms();
        let existing: Vec<Room> = built_in_rooms()
            .into_iter()
            .filter(|room| room.id != RoomId::new(3))
            .collect();

        let merged = merge_seed(&seed, &existing);
        assert_eq!(merged.len(), 7);
        assert!(merged.iter().any(|room| room.id == RoomId::new(3)));
    }

    #[test]
    fn test_merge_respects_id_takeover() {
        // An admin room reusing a seed id blocks that seed room from
        // reappearing: the append step matches by id alone.
        let seed = built_in_rooms();
        let mut existing: Vec<Room> = built_in_rooms()
            .into_iter()
            .filter(|room| room.id != RoomId::new(7))
            .collect();
        let mut replacement = seed[0].clone();
        replacement.id = RoomId::new(7);
        replacement.name = "Loft Norte".to_string();
        existing.push(replacement);

        let merged = merge_seed(&seed, &existing);
        assert_eq!(merged.len(), 7);
        assert!(merged.iter().any(|room| room.name == "Loft Norte"));
        assert!(!merged.iter().any(|room| room.name == "Villa One Saint"));
    }
}
