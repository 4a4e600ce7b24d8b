// Sample network used by the binary and the integration tests

use std::collections::HashMap;

use crate::core::ConnectionType;
use crate::error::AppResult;
use crate::graph::SocialGraph;

const PIZZA_ESSAY: &str = "Pizza, a dish that has transcended cultures and borders, is often regarded as a universal favorite. Originating from Italy, its classic form features a round, flat base of leavened wheat-based dough topped with tomatoes, cheese, and various toppings. The versatility of pizza allows it to cater to diverse palates, with options ranging from the traditional Margherita to more adventurous combinations like barbecue chicken or vegan alternatives. The social aspect of sharing a pizza has played a significant role in its global popularity, making it a staple at gatherings, parties, and casual dining experiences. As pizza continues to evolve, local adaptations and gourmet interpretations reflect the culinary creativity of different regions, solidifying its status not just as food, but as a cultural phenomenon that brings people together.";

fn profile(age: &str, gender: &str, country: &str, job: &str) -> HashMap<String, String> {
    HashMap::from([
        ("age".to_string(), age.to_string()),
        ("gender".to_string(), gender.to_string()),
        ("country".to_string(), country.to_string()),
        ("job".to_string(), job.to_string()),
    ])
}

/// Three users around a pizza shop: two Italian coworkers and one critic.
pub fn sample_network() -> AppResult<SocialGraph> {
    let mut graph = SocialGraph::new();

    let mike = graph.register_user("Mike", profile("21", "male", "Italy", "Pizza Chef"))?;
    let vic = graph.register_user("Vic", profile("18", "female", "Italy", "Cashier"))?;
    let hater = graph.register_user("PizzaHater321", profile("12", "male", "USA", "Student"))?;

    graph.connect(&mike, &vic, ConnectionType::coworker())?;
    graph.connect(&vic, &mike, ConnectionType::coworker())?;
    graph.connect(&hater, &mike, ConnectionType::seen())?;
    graph.connect(&hater, &vic, ConnectionType::seen())?;

    let essay = graph.publish(&mike, PIZZA_ESSAY)?;
    graph.view(&vic, essay)?;
    graph.view(&hater, essay)?;
    graph.comment(&vic, essay, "See you at work")?;
    graph.comment(&hater, essay, "Nah")?;

    let torus = graph.publish(&vic, "Torus Shaped Pizza")?;
    graph.view(&hater, torus)?;
    graph.view(&mike, torus)?;
    graph.comment(&hater, torus, "Ew")?;
    graph.comment(&mike, torus, "Mama mia what are you doing with our stock")?;
    graph.comment(&vic, torus, "It's called innovation bozo")?;
    graph.comment(&mike, torus, "We're going bankrupt")?;

    graph.publish(&hater, "I Hate Pizza")?;

    Ok(graph)
}
