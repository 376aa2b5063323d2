// Built-in catalog data
use super::Movie;

fn movie(
    id: &str,
    title: &str,
    category: &str,
    image: &str,
    description: &str,
    rating: f32,
    video_url: &str,
    download_url: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        rating: Some(rating),
        video_url: video_url.to_string(),
        download_url: download_url.to_string(),
    }
}

/// The full catalog, in the order the gallery shows it.
pub(super) fn builtin_movies() -> Vec<Movie> {
    vec![
        movie(
            "star1",
            "Star Wars: Episode I",
            "sci-fi",
            "images/star_wars1.webp",
            "Two Jedi escape a hostile blockade to find a new young ally who may bring \
             balance to the Force, but the long dormant Sith resurface to claim their old glory.",
            4.2,
            "videos/star1.mp4",
            "downloads/star1.mp4",
        ),
        movie(
            "star2",
            "Star Wars: Episode II",
            "sci-fi",
            "images/star_wars2.webp",
            "Ten years after initially meeting, Anakin Skywalker shares a forbidden romance \
             with Padmé Amidala, while Obi-Wan Kenobi investigates an assassination attempt on \
             the senator and discovers a secret clone army crafted for the Jedi.",
            4.0,
            "videos/star2.mp4",
            "downloads/star2.mp4",
        ),
        movie(
            "star3",
            "Star Wars: Episode III",
            "sci-fi",
            "images/star_wars3.webp",
            "Three years into the Clone Wars, the Jedi rescue Palpatine from Count Dooku. As \
             Obi-Wan pursues a new threat, Anakin acts as a double agent between the Jedi \
             Council and Palpatine and is lured into a sinister plan to rule the galaxy.",
            4.5,
            "videos/star3.mp4",
            "downloads/star3.mp4",
        ),
        movie(
            "trans1",
            "Transformers",
            "action",
            "images/transformers1.webp",
            "An ancient struggle between two Cybertronian races, the heroic Autobots and the \
             evil Decepticons, comes to Earth, with a clue to the ultimate power held by a \
             teenager.",
            4.1,
            "videos/trans1.mp4",
            "downloads/trans1.mp4",
        ),
        movie(
            "trans2",
            "Transformers: Revenge of the Fallen",
            "action",
            "images/trans2.webp",
            "Sam Witwicky leaves the Autobots behind for a normal life. But when his mind is \
             filled with cryptic symbols, the Decepticons target him and he is dragged back \
             into the Transformers' war.",
            3.9,
            "videos/trans2.mp4",
            "downloads/trans2.mp4",
        ),
        movie(
            "trans3",
            "Transformers: Dark of the Moon",
            "action",
            "images/trans3.webp",
            "The Autobots learn of a Cybertronian spacecraft hidden on the moon, and race \
             against the Decepticons to reach it and to learn its secrets.",
            4.0,
            "videos/trans3.mp4",
            "downloads/trans3.mp4",
        ),
        movie(
            "trans4",
            "Transformers: Age of Extinction",
            "action",
            "images/trans4.webp",
            "When humanity allies with a bounty hunter in pursuit of Optimus Prime, the \
             Autobots turn to a mechanic and his family for help.",
            3.7,
            "videos/trans4.mp4",
            "downloads/trans4.mp4",
        ),
        movie(
            "trans5",
            "Transformers: The Last Knight",
            "action",
            "images/trans5.webp",
            "A deadly threat from Earth's history reappears, and a hunt for a lost artifact \
             takes place between Autobots and Decepticons, while Optimus Prime encounters his \
             creator in space.",
            3.5,
            "videos/trans5.mp4",
            "downloads/trans5.mp4",
        ),
    ]
}
