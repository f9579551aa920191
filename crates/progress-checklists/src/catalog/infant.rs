use progress_core::models::template::Template;

use super::{COGNITIVE, LANGUAGE, MOVEMENT, SOCIAL, template};

pub(super) fn months_0_3() -> Template {
    template(
        "months_0_3",
        "0–3 Months",
        (0, 3),
        &[
            (
                SOCIAL,
                &[
                    "Calms down when spoken to or picked up",
                    "Looks at your face",
                    "Begins to smile at people",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Makes sounds other than crying",
                    "Reacts to loud sounds",
                    "Turns head toward sounds",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Watches you as you move",
                    "Looks at a toy for several seconds",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Holds head up when on tummy",
                    "Moves both arms and both legs",
                    "Opens hands briefly",
                ],
            ),
        ],
        &[
            "Does not respond to loud sounds",
            "Does not watch things as they move",
            "Does not smile at people",
            "Cannot hold head up well",
        ],
    )
}

pub(super) fn months_4_6() -> Template {
    template(
        "months_4_6",
        "4–6 Months",
        (4, 6),
        &[
            (
                SOCIAL,
                &[
                    "Knows familiar people",
                    "Likes to look at self in a mirror",
                    "Laughs",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Takes turns making sounds with you",
                    "Blows raspberries",
                    "Makes squealing noises",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Puts things in mouth to explore them",
                    "Reaches to grab a toy they want",
                    "Closes lips to show they do not want more food",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Rolls from tummy to back",
                    "Pushes up with straight arms when on tummy",
                    "Leans on hands to support self when sitting",
                ],
            ),
        ],
        &[
            "Does not try to get things in reach",
            "Shows no affection for caregivers",
            "Does not make vowel sounds",
            "Seems very stiff or very floppy",
        ],
    )
}

pub(super) fn months_7_9() -> Template {
    template(
        "months_7_9",
        "7–9 Months",
        (7, 9),
        &[
            (
                SOCIAL,
                &[
                    "Is shy, clingy, or fearful around strangers",
                    "Shows several facial expressions",
                    "Looks when you call their name",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Makes different sounds like \"mamamama\" and \"babababa\"",
                    "Lifts arms up to be picked up",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Looks for objects when dropped out of sight",
                    "Bangs two things together",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Gets to a sitting position alone",
                    "Moves things from one hand to the other",
                    "Sits without support",
                ],
            ),
        ],
        &[
            "Does not bear weight on legs with support",
            "Does not respond to own name",
            "Does not babble",
            "Does not look where you point",
        ],
    )
}

pub(super) fn months_10_12() -> Template {
    template(
        "months_10_12",
        "10–12 Months",
        (10, 12),
        &[
            (
                SOCIAL,
                &[
                    "Plays games with you, like pat-a-cake",
                    "Hands you a book to hear a story",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Waves \"bye-bye\"",
                    "Calls a parent \"mama\" or \"dada\" or another special name",
                    "Understands \"no\"",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Puts something in a container",
                    "Looks for things they see you hide",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Pulls up to stand",
                    "Walks, holding on to furniture",
                    "Drinks from a cup without a lid, as you hold it",
                    "Picks things up between thumb and pointer finger",
                ],
            ),
        ],
        &[
            "Does not crawl",
            "Cannot stand when supported",
            "Does not search for things hidden in view",
            "Does not use gestures such as waving or shaking head",
            "Loses skills they once had",
        ],
    )
}
