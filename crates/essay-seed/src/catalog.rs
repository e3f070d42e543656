//! The fixed set of sample essays inserted by the seed binary.

use crate::models::EssayRecord;

static ESSAYS: [EssayRecord; 5] = [
    EssayRecord {
        title: "Common App - Personal Growth",
        college: "Stanford University",
        prompt: "Common App - Personal Growth",
        major: "Computer Science",
        word_count: 650,
        year: 2023,
        content: "The first time I wrote code, I was thirteen years old. My father, a software engineer, had shown me a simple Python script that printed 'Hello, World!' to the console. That moment sparked a curiosity that would grow into a passion. But my journey with programming wasn't always smooth...",
        verified: true,
    },
    EssayRecord {
        title: "Stanford Roommate Essay",
        college: "Stanford University",
        prompt: "Stanford Roommate",
        major: "Biology",
        word_count: 250,
        year: 2022,
        content: "Dear future roommate, I want to introduce myself beyond the typical resume and application. I'm the person who alphabetizes their spice rack but leaves laundry unfolded for days. I'm the night owl who functions best after midnight, fueled by chamomile tea and the playlist I've curated for late-night study sessions...",
        verified: true,
    },
    EssayRecord {
        title: "UC Personal Insight Question 2",
        college: "UC Berkeley",
        prompt: "UC PIQ - Creative Expression",
        major: "English Literature",
        word_count: 350,
        year: 2023,
        content: "My creativity expresses itself in unexpected ways. While I've never considered myself an artist in the traditional sense, words have always been my medium. I started writing short stories when I was nine, filling notebooks with tales of adventure and mystery...",
        verified: false,
    },
    EssayRecord {
        title: "Harvard 'What You Would Contribute'",
        college: "Harvard University",
        prompt: "Community Contribution",
        major: "Economics",
        word_count: 500,
        year: 2022,
        content: "Community has always been central to my identity. Growing up in a small town in rural Minnesota, I learned early on that collective effort creates resilience. When our local library faced budget cuts, I organized a fundraising campaign that ultimately saved three staff positions...",
        verified: true,
    },
    EssayRecord {
        title: "MIT 'World You Come From'",
        college: "MIT",
        prompt: "Background and Identity",
        major: "Physics",
        word_count: 400,
        year: 2023,
        content: "The sound of my grandmother's sewing machine is the soundtrack of my childhood. In our two-bedroom apartment in Queens, she would work late into the night, transforming fabric into clothing for our family and neighbors. I would sit at her feet, collecting scraps and learning to see potential in what others might discard...",
        verified: true,
    },
];

/// Returns the sample essays in insertion order.
pub fn essays() -> &'static [EssayRecord] {
    &ESSAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_essays() {
        assert_eq!(essays().len(), 5);
    }

    #[test]
    fn test_every_field_is_populated() {
        for essay in essays() {
            for text in [
                essay.title,
                essay.college,
                essay.prompt,
                essay.major,
                essay.content,
            ] {
                assert!(!text.trim().is_empty(), "empty field in {:?}", essay.title);
            }
            assert!(essay.word_count > 0);
            assert!(essay.year > 0);
        }
    }

    #[test]
    fn test_sample_titles_are_distinct() {
        let titles: std::collections::HashSet<_> = essays().iter().map(|e| e.title).collect();
        assert_eq!(titles.len(), essays().len());
    }

    #[test]
    fn test_one_essay_is_unverified() {
        let unverified: Vec<_> = essays().iter().filter(|e| !e.verified).collect();
        assert_eq!(unverified.len(), 1);
        assert_eq!(unverified[0].college, "UC Berkeley");
    }
}
