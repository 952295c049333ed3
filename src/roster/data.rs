//! The canonical roster table, transcribed from the enrollment
//! spreadsheet. One section per show block; members are (name, raw
//! commitment) pairs exactly as harvested.

pub struct RosterSection {
    pub date: &'static str,
    pub time: &'static str,
    pub stage: &'static str,
    pub members: &'static [(&'static str, &'static str)],
}

pub(crate) static ROSTER: &[RosterSection] = &[
    // MONDAY - Stage One - Five Minutes
    RosterSection {
        date: "Monday, 3 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage One",
        members: &[
            ("Amelia Beukes", "First Year Pin June"),
            ("Arie Pope", "First Year Pin Nov"),
            ("Dakota East", "2 years of drama"),
            ("Eadie Glatz", "2 years of drama"),
            ("Ella Henshall", "5 years of drama"),
            ("Gabrielle Hall", "(None)"),
            ("Leo Epps", "2 years of drama"),
            ("Lydia Deepan", "2 years of drama"),
            ("Penelope Hall", "First Year Pin June"),
            ("Sara Bates", "Intermediate"),
            ("Willow Fuamatu", "Beginner"),
        ],
    },
    // MONDAY - Stage Two - The Bad Side
    RosterSection {
        date: "Monday, 3 November 2025",
        time: "5:00 PM to 6:00 PM",
        stage: "Stage Two",
        members: &[
            ("Charlie Wills", "5 years of drama"),
            ("Cora Critch", "2 years of drama"),
            ("Dante Jameson", "2 years of drama"),
            ("Darby Scott-Anderson", "4 years of drama"),
            ("Ella Fagan", "5 years of drama"),
            ("Ella Singe", "2 years of drama"),
            ("George Clohesy", "2 years of drama"),
            ("Isla Mealmaker", "4 years of drama"),
            ("Ivy Burdeu", "4 years of drama"),
            ("Jackson Petty-Willis", "5 years of drama"),
            ("Kennedy Murphey", "2 years of drama"),
            ("Lilly Nadin", "2 years of drama"),
            ("Logan Shard", "3 years of drama"),
            ("Maggie Amarant", "6 years of drama"),
            ("Nellie Ratcliffe", "5 years of drama"),
            ("Olivia Osborne", "5 years of drama"),
        ],
    },
    // MONDAY - Stage Three - Ferrier's Shoes
    RosterSection {
        date: "Monday, 3 November 2025",
        time: "6:00 PM to 7:00 PM",
        stage: "Stage Three",
        members: &[
            ("Aida Burns", "First Year Pin November"),
            ("Amelia Watkins", "Beginner"),
            ("Ella Bailey", "2 years of drama"),
            ("Ewan Dellar", "5 years of drama"),
            ("Indiana Houghton", "5 years of drama"),
            ("Isabella Wiegard", "10 years of drama"),
            ("Keira Heath", "2 years of drama"),
            ("Lucy Cummings", "4 years of drama"),
            ("Maggie Deacon", "4 years of drama"),
            ("Milla Gregg", "Intermediate"),
            ("Milla Web", "2 years of drama"),
            ("Peyton Bish", "2 years of drama"),
            ("Tahlia Giffard", "8 years of drama"),
            ("Zarah Mealmaker", "3 years of drama"),
        ],
    },
    // TUESDAY - Stage One - Five Minutes
    RosterSection {
        date: "Tuesday, 4 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage One",
        members: &[
            ("Billie Lothian", "Beginner"),
            ("Charlee Russell", "2 years of drama"),
            ("Emily Ede", "2 years of drama"),
            ("George Dewhurst", "5 years of drama"),
            ("Hannah Rodd", "(None)"),
            ("Isla Rorke", "3 years of drama"),
            ("Matilda Engi", "4 years of drama"),
            ("Mila McMillan", "First Year Pin June"),
            ("Poppy Stanaway", "2 years of drama"),
            ("Ruby Sait", "2 years of drama"),
            ("Sophie Breewel", "2 years of drama"),
            ("Teddy Thomson", "3 years of drama"),
        ],
    },
    // TUESDAY - Stage Two - listed against Stage Two in the spreadsheet
    // despite the Stage One time window
    RosterSection {
        date: "Tuesday, 4 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage Two",
        members: &[("Amy Clarkson", "5 years of drama")],
    },
    // TUESDAY - Stage Two - The Bad Side
    RosterSection {
        date: "Tuesday, 4 November 2025",
        time: "5:00 PM to 6:00 PM",
        stage: "Stage Two",
        members: &[
            ("Anna Francis", "First Year Pin Nov"),
            ("Arlie Allen", "2 years of drama"),
            ("Eliza Hepburn", "(None)"),
            ("Elsie Rice", "5 years of drama"),
            ("Freddy Campbell", "4 years of drama"),
            ("Grace Beattie", "First Year Pin June"),
            ("Greta Sbaglia", "2 years of drama"),
            ("Kaia Langeder", "Beginner"),
            ("Leila Skan", "2 years of drama"),
            ("Letty Sendy", "2 years of drama"),
            ("Memphis June Meggs", "5 years of drama"),
            ("Olivia Ogeimi", "(None)"),
            ("Otto Luedecke", "2 years of drama"),
            ("Sam Miller", "4 years of drama"),
        ],
    },
    // TUESDAY - Stage Three - Ferrier's Shoes
    RosterSection {
        date: "Tuesday, 4 November 2025",
        time: "6:00 PM to 7:00 PM",
        stage: "Stage Three",
        members: &[
            ("Abbygail Kay", "5 years of drama"),
            ("Amelia O'Rielly", "4 years of drama"),
            ("Athena Jones", "4 years of drama"),
            ("Bailey Norton", "6 years of drama"),
            ("Charlotte Perryman", "2 years of drama"),
            ("Ellen Frigerio", "4 years of drama"),
            ("Eve Martin", "2 years of drama"),
            ("Finn Beattie", "8 years of drama"),
            ("George Macumber", "2 years of drama"),
            ("Georgina Sbaglia", "2 years of drama"),
            ("Hazel Ziffer", "6 years of drama"),
            ("Liam Westbury", "2 years of drama"),
            ("Olivia Wells", "8 years of drama"),
            ("Ruby Robson", "2 years of drama"),
            ("Taleitha Perrow", "2 years of drama"),
            ("Victoria Tomkins", "6 years of drama"),
        ],
    },
    // WEDNESDAY - Stage One - Five Minutes
    RosterSection {
        date: "Wednesday, 5 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage One",
        members: &[
            ("Alyssa Delmenico", "2 years of drama"),
            ("Amelia Greening", "(None)"),
            ("Harper Ridgeway", "3 years of drama"),
            ("Henry Beal", "4 years of drama"),
            ("Ivy Spicer", "First Year Pin June"),
            ("Josie White", "Intermediate"),
            ("Leo Turner", "Beginner"),
            ("Lilly Foster", "2 years of drama"),
            ("Millie Haydock", "3 years of drama"),
            ("Reyansh Thaker", "2 years of drama"),
            ("Scarlett Besley", "2 years of drama"),
            ("Talia Roe", "3 years of drama"),
            ("Ziggy Naidoo", "4 years of drama"),
        ],
    },
    // WEDNESDAY - Stage Two - The Bad Side
    RosterSection {
        date: "Wednesday, 5 November 2025",
        time: "5:00 PM to 6:00 PM",
        stage: "Stage Two",
        members: &[
            ("Aaliyah O'Meara", "First Year Pin Nov"),
            ("Alex Hicks", "First Year Pin June"),
            ("Alice Stockx", "7 years of drama"),
            ("Ava Giffard", "Beginner"),
            ("Charles Smith", "2 years of drama"),
            ("Charlotte McAuliffe", "2 years of drama"),
            ("Clementine Gray", "5 years of drama"),
            ("Jackson Spicer", "(None)"),
            ("Jed Strickland", "3 years of drama"),
            ("Lucy Mclean", "4 years of drama"),
            ("Malis Worrell", "2 years of drama"),
            ("Matilda Robertson", "2 years of drama"),
            ("Matilda Stubbins", "Beginner"),
            ("Olive Gladstone", "2 years of drama"),
            ("Oliver Grange", "3 years of drama"),
            ("Paige DeJong", "7 years of drama"),
            ("Rebekah Mclean", "(None)"),
        ],
    },
    // WEDNESDAY - Stage Three - Ferrier's Shoes
    RosterSection {
        date: "Wednesday, 5 November 2025",
        time: "6:00 PM to 7:00 PM",
        stage: "Stage Three",
        members: &[
            ("Alira Hill", "4 years of drama"),
            ("Arlo Sergi", "4 years of drama"),
            ("Eva Lees", "4 years of drama"),
            ("Hannah Torney", "First Year Pin June"),
            ("Innes Downie", "10 years of drama"),
            ("Jack Carter", "4 years of drama"),
            ("Jaymen Mannix Pascoe", "2 years of drama"),
            ("Neve Duthie", "5 years of drama"),
            ("Sara Douglas", "2 years of drama"),
            ("Tamati McLarty", "7 years of drama"),
        ],
    },
    // THURSDAY - Stage One - Five Minutes
    RosterSection {
        date: "Thursday, 6 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage One",
        members: &[
            ("Charlotte Vandervalk", "1 year of drama"),
            ("Dominic Petterlin", "2 years of drama"),
            ("Dominica Mangantulao", "First Year Pin June"),
            ("Elsie Sharp", "Intermediate"),
            ("Elsie Untwan", "Beginner"),
            ("Ingrid Campbell", "2 years of drama"),
            ("Millie Jensen", "2 years of drama"),
            ("Minnie Petterlin", "2 years of drama"),
            ("Trixie Hepburn", "(None)"),
        ],
    },
    // THURSDAY - Stage Two - Our Space (moved from Friday)
    RosterSection {
        date: "Thursday, 6 November 2025",
        time: "4:00 PM to 5:00 PM",
        stage: "Stage Two",
        members: &[
            ("Arabella McGowen", "4 years of drama"),
            ("Charlie Flack", "Intermediate"),
            ("Erin Mills", "Beginner"),
            ("Eve Sheldrick", "2 years of drama"),
            ("James Johnson", "3 years of drama"),
            ("Jane Lonsdale", "5 years of drama"),
            ("Lotti Anstee", "3 years of drama"),
            ("Macy Camm", "4 years of drama"),
            ("Sienna Davey", "2 years of drama"),
            ("Susannah Mayne", "Intermediate"),
            ("Thomas McColl", "Beginner"),
            ("Willow Johnson", "2 years of drama"),
        ],
    },
    // THURSDAY - Stage Two - Pirated
    RosterSection {
        date: "Thursday, 6 November 2025",
        time: "5:00 PM to 6:00 PM",
        stage: "Stage Two",
        members: &[
            ("Alexia Read", "1 year of drama"),
            ("April Muscovich", "3 years of drama"),
            ("Avery Murtagh", "4 years of drama"),
            ("Blaise Carr", "First Year Pin June"),
            ("Brock Kostos", "2 years of drama"),
            ("Corazon Mangantulao", "2 years of drama"),
            ("Ella Manypeney", "2 years of drama"),
            ("Isabella Gill", "3 years of drama"),
            ("Jasper Walton", "5 years of drama"),
            ("Logan Crothers", "(None)"),
            ("Marcelle Varma", "2 years of drama"),
            ("Phillipa Kohlman", "2 years of drama"),
            ("Sophie Pedrotti", "First Year Pin June"),
        ],
    },
    // THURSDAY - Stage Two - Ferrier's Shoes cast, Bad Side slot (moved from Friday)
    RosterSection {
        date: "Thursday, 6 November 2025",
        time: "5:30 PM to 6:30 PM",
        stage: "Stage Two",
        members: &[
            ("Anaïs Lyons", "2 years of drama"),
            ("Charlotte Bysouth", "2 years of drama"),
            ("Isabelle Smith", "5 years of drama"),
            ("Kaylee Hitchcock", "(None)"),
            ("Kayleigh White", "(None)"),
            ("Layla Ware", "3 years of drama"),
            ("Mila Holmfield", "4 years of drama"),
            ("Nora Thompson", "First Year Pin June"),
            ("Olivia Akers", "Intermediate"),
            ("Rachel Toifl", "Beginner"),
            ("Skylar Shard", "2 years of drama"),
            ("Victoria May Yong", "3 years of drama"),
        ],
    },
];
