use progress_core::models::template::Template;

use super::{COGNITIVE, LANGUAGE, MOVEMENT, SOCIAL, template};

pub(super) fn months_13_18() -> Template {
    template(
        "months_13_18",
        "13–18 Months",
        (13, 18),
        &[
            (
                SOCIAL,
                &[
                    "Moves away from you, but looks to make sure you are close by",
                    "Points to show you something interesting",
                    "Puts hands out for you to wash them",
                    "Helps you dress by pushing arm through sleeve",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Tries to say three or more words besides \"mama\" or \"dada\"",
                    "Follows one-step directions without gestures",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Copies you doing chores",
                    "Plays with toys in a simple way, like pushing a toy car",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Walks without holding on to anyone or anything",
                    "Scribbles",
                    "Drinks from a cup without a lid and may spill sometimes",
                    "Feeds self with fingers",
                    "Climbs on and off a couch or chair without help",
                ],
            ),
        ],
        &[
            "Does not point to show things to others",
            "Cannot walk",
            "Does not know what familiar things are for",
            "Does not copy others",
            "Does not gain new words",
        ],
    )
}

pub(super) fn months_19_24() -> Template {
    template(
        "months_19_24",
        "19–24 Months",
        (19, 24),
        &[
            (
                SOCIAL,
                &[
                    "Notices when others are hurt or upset",
                    "Looks at your face to see how to react in a new situation",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Points to things in a book when you ask",
                    "Says at least two words together, like \"More milk\"",
                    "Points to at least two body parts when you ask",
                    "Uses more gestures than just waving and pointing",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Holds something in one hand while using the other hand",
                    "Tries to use switches, knobs, or buttons on a toy",
                    "Plays with more than one toy at the same time",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Kicks a ball",
                    "Runs",
                    "Walks up a few stairs with or without help",
                    "Eats with a spoon",
                ],
            ),
        ],
        &[
            "Does not use two-word phrases",
            "Does not follow simple instructions",
            "Does not walk steadily",
            "Does not copy actions and words",
            "Loses skills they once had",
        ],
    )
}
