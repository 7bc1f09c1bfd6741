//! Built-in "discover" itineraries users can copy into their own trip list.
//!
//! Template ids are only internally consistent; copying a template through
//! `Database::insert_trip_with_details` rebinds every child row to the
//! freshly assigned trip id.

use chrono::NaiveDate;

use crate::models::{Attraction, Label, LabelKind, Priority, Trip, TripDetails};

fn template_trip(
    id: i64,
    name: &str,
    description: &str,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    today: NaiveDate,
) -> Trip {
    Trip {
        id,
        name: name.into(),
        description: description.into(),
        latitude,
        longitude,
        radius_km,
        start: today,
        end: today,
        days_before_to_remind: 1,
        image_uri: String::new(),
    }
}

fn template_attraction(trip_id: i64, name: &str, description: &str, today: NaiveDate) -> Attraction {
    Attraction {
        id: 0,
        trip_id,
        name: name.into(),
        description: description.into(),
        date: today,
        done: false,
        priority: Priority::Medium,
    }
}

fn template_label(trip_id: i64, kind: LabelKind) -> Label {
    Label { id: 0, trip_id, kind }
}

/// The five built-in itineraries. Dates default to `today`, matching a
/// freshly created trip; the user adjusts them after copying.
pub fn template_trips(today: NaiveDate) -> Vec<TripDetails> {
    vec![
        TripDetails {
            trip: template_trip(
                1,
                "Paris",
                "Paris, the City of Light, enchants with the Eiffel Tower, Louvre treasures, and romantic charm along the Seine—a global center of art, fashion, and timeless elegance.",
                48.8566,
                2.3522,
                105.0,
                today,
            ),
            attractions: vec![
                template_attraction(1, "Eiffel Tower", "Iconic landmark offering panoramic views", today),
                template_attraction(1, "Louvre Museum", "World's largest art museum, a historic treasure", today),
                template_attraction(1, "Seine River", "Charming waterway winding through the city", today),
                template_attraction(1, "Notre-Dame", "Gothic masterpiece on the Île de la Cité", today),
                template_attraction(1, "Montmartre", "Artistic district with a basilica offering city views", today),
                template_attraction(1, "Musée d'Orsay", "Renowned museum in a former railway station", today),
                template_attraction(1, "Père Lachaise Cemetery", "Historic cemetery with notable graves, including Jim Morrison's", today),
            ],
            labels: vec![
                template_label(1, LabelKind::City),
                template_label(1, LabelKind::Culture),
            ],
        },
        TripDetails {
            trip: template_trip(
                2,
                "Berlin",
                "Berlin, the German capital, boasts a vibrant cultural scene, historical landmarks like the Brandenburg Gate, and a dynamic mix of modernity and history.",
                52.52,
                13.405,
                100.0,
                today,
            ),
            attractions: vec![
                template_attraction(2, "Brandenburg Gate", "Historic symbol and monumental city gate", today),
                template_attraction(2, "Berlin Wall", "Powerful remnants of Berlin's divided past", today),
                template_attraction(2, "Reichstag", "German Parliament building with a glass dome for panoramic views", today),
                template_attraction(2, "Checkpoint Charlie", "Famous Cold War checkpoint and museum", today),
                template_attraction(2, "Holocaust Memorial", "Powerful memorial dedicated to the Jewish victims of the Holocaust", today),
            ],
            labels: vec![template_label(2, LabelKind::City)],
        },
        TripDetails {
            trip: template_trip(
                3,
                "Łódź",
                "Łódź, Poland's city of contrasts, harmonizes industrial heritage with vibrant street art, film festivals, and the lively Piotrkowska Street.",
                51.7592,
                19.455,
                50.0,
                today,
            ),
            attractions: vec![
                template_attraction(3, "Piotrkowska Street", "Historic street adorned with vibrant art, shops, and lively festivals", today),
                template_attraction(3, "Textile Museum", "Showcases the city's rich industrial heritage in the textile industry", today),
                template_attraction(3, "Manufaktura", "Former industrial complex turned into a modern shopping, arts, and entertainment center", today),
                template_attraction(3, "EC1 Łódź - City of Culture", "Cultural complex housed in a former power station, featuring exhibitions and events", today),
                template_attraction(3, "Film Museum", "Celebrates Łódź's significant role in the history of Polish cinema", today),
            ],
            labels: vec![
                template_label(3, LabelKind::City),
                template_label(3, LabelKind::Kids),
            ],
        },
        TripDetails {
            trip: template_trip(
                4,
                "Sheffield",
                "Sheffield, nestled in South Yorkshire, England, combines industrial history with a contemporary arts scene, picturesque hills, and vibrant markets.",
                53.3811,
                -1.4701,
                40.0,
                today,
            ),
            attractions: vec![
                template_attraction(4, "Sheffield Winter Garden", "Largest urban glasshouse in Europe, housing a diverse collection of plants", today),
                template_attraction(4, "Chatsworth House", "Majestic stately home surrounded by beautiful gardens and landscapes", today),
                template_attraction(4, "Kelham Island Museum", "Industrial museum showcasing Sheffield's manufacturing history", today),
                template_attraction(4, "Peak District National Park", "Picturesque hills and outdoor adventures on Sheffield's doorstep", today),
                template_attraction(4, "Millennium Gallery", "Contemporary art and design in the heart of the city", today),
                template_attraction(4, "Sheffield Botanical Gardens", "Victorian gardens with diverse plant collections and stunning greenhouses", today),
                template_attraction(4, "Weston Park Museum", "Archaeological and natural history exhibits in a beautiful park setting", today),
                template_attraction(4, "Sheffield Cathedral", "Historic cathedral with impressive architecture and peaceful surroundings", today),
            ],
            labels: vec![template_label(4, LabelKind::Active)],
        },
        TripDetails {
            trip: template_trip(
                5,
                "Shanghai",
                "Shanghai, China's dynamic metropolis, showcases a modern skyline along the Huangpu River, blending tradition with global commerce and iconic landmarks like the Oriental Pearl Tower.",
                31.2304,
                121.4737,
                150.0,
                today,
            ),
            attractions: vec![
                template_attraction(5, "Oriental Pearl Tower", "Iconic skyscraper on the Shanghai skyline.", today),
                template_attraction(5, "The Bund", "Historic waterfront area with colonial architecture.", today),
                template_attraction(5, "Yuyuan Garden", "Classical Chinese garden in the Old City.", today),
                template_attraction(5, "Shanghai Museum", "China's premier museum with ancient artifacts and art collections.", today),
                template_attraction(5, "Jin Mao Tower", "Skyscraper with panoramic views and a unique design.", today),
                template_attraction(5, "Nanjing Road", "One of the world's busiest shopping streets.", today),
                template_attraction(5, "Zhujiajiao Water Town", "Ancient water town with canals, bridges, and traditional architecture.", today),
            ],
            labels: vec![
                template_label(5, LabelKind::City),
                template_label(5, LabelKind::Beach),
            ],
        },
    ]
}
