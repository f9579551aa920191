use progress_core::models::template::Template;

use super::{COGNITIVE, LANGUAGE, MOVEMENT, SOCIAL, template};

pub(super) fn years_2_3() -> Template {
    template(
        "years_2_3",
        "2–3 Years",
        (25, 36),
        &[
            (
                SOCIAL,
                &[
                    "Calms down within 10 minutes after you leave",
                    "Notices other children and joins them to play",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Talks with you in conversation using at least two back-and-forth exchanges",
                    "Asks \"who,\" \"what,\" \"where,\" or \"why\" questions",
                    "Says what action is happening in a picture or book",
                    "Says first name, when asked",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Draws a circle, when you show how",
                    "Avoids touching hot objects when warned",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Strings items together, like large beads",
                    "Puts on some clothes by self",
                    "Uses a fork",
                ],
            ),
        ],
        &[
            "Falls down a lot or has trouble with stairs",
            "Drools or has very unclear speech",
            "Cannot work simple toys",
            "Does not make eye contact",
            "Does not play pretend",
        ],
    )
}

pub(super) fn years_3_4() -> Template {
    template(
        "years_3_4",
        "3–4 Years",
        (37, 48),
        &[
            (
                SOCIAL,
                &[
                    "Pretends to be something else during play",
                    "Asks to go play with children if none are around",
                    "Comforts others who are hurt or sad",
                    "Avoids danger, like not jumping from tall heights",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Says sentences with four or more words",
                    "Says some words from a song, story, or nursery rhyme",
                    "Talks about at least one thing that happened during the day",
                    "Answers simple questions like \"What is a coat for?\"",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Names a few colors of items",
                    "Tells what comes next in a well-known story",
                    "Draws a person with three or more body parts",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Catches a large ball most of the time",
                    "Serves self food or pours water, with adult supervision",
                    "Unbuttons some buttons",
                    "Holds crayon or pencil between fingers and thumb",
                ],
            ),
        ],
        &[
            "Cannot jump in place",
            "Has trouble scribbling",
            "Shows no interest in interactive games or make-believe",
            "Ignores other children",
            "Does not understand \"same\" and \"different\"",
        ],
    )
}

pub(super) fn years_4_5() -> Template {
    template(
        "years_4_5",
        "4–5 Years",
        (49, 60),
        &[
            (
                SOCIAL,
                &[
                    "Follows rules or takes turns when playing games with other children",
                    "Sings, dances, or acts for you",
                    "Does simple chores at home",
                ],
            ),
            (
                LANGUAGE,
                &[
                    "Tells a story they heard or made up with at least two events",
                    "Answers simple questions about a book or story",
                    "Keeps a conversation going with more than three exchanges",
                    "Uses or recognizes simple rhymes",
                ],
            ),
            (
                COGNITIVE,
                &[
                    "Counts to 10",
                    "Names some numbers between 1 and 5 when you point to them",
                    "Uses words about time, like \"yesterday\" or \"tomorrow\"",
                    "Pays attention for 5 to 10 minutes during activities",
                    "Writes some letters in their name",
                ],
            ),
            (
                MOVEMENT,
                &[
                    "Buttons some buttons",
                    "Hops on one foot",
                ],
            ),
        ],
        &[
            "Does not show a wide range of emotions",
            "Is unusually withdrawn and not active",
            "Is easily distracted and has trouble focusing for more than 5 minutes",
            "Cannot tell what is real and what is make-believe",
            "Does not respond to people, or responds only superficially",
        ],
    )
}
