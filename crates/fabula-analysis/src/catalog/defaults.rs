//! The default catalog: the 31 narrative functions of the folktale.

/// `(code, description)` pairs in canonical order F1..F31.
pub const DEFAULT_FUNCTIONS: [(&str, &str); 31] = [
    ("F1", "Absentation (A member of the family leaves home)"),
    ("F2", "Interdiction (An interdiction is addressed to the hero)"),
    ("F3", "Violation (The interdiction is violated)"),
    ("F4", "Reconnaissance (The villain makes an attempt at reconnaissance)"),
    ("F5", "Delivery (The villain receives information about the victim)"),
    ("F6", "Trickery (The villain attempts to deceive the victim)"),
    ("F7", "Complicity (The victim falls for the deception)"),
    ("F8", "Villainy/Lack (The villain causes harm or a lack arises)"),
    ("F9", "Mediation (The misfortune is made known, the hero is dispatched)"),
    ("F10", "Counteraction (The hero agrees to counteraction)"),
    ("F11", "Departure (The hero leaves home)"),
    ("F12", "Testing (The hero is tested by the donor)"),
    ("F13", "Reaction (The hero reacts to the actions of the donor)"),
    ("F14", "Acquisition (The hero acquires a magical agent)"),
    ("F15", "Guidance (The hero is led to the object of search)"),
    ("F16", "Struggle (The hero and the villain join in direct combat)"),
    ("F17", "Branding (The hero is branded)"),
    ("F18", "Victory (The villain is defeated)"),
    ("F19", "Liquidation (The initial misfortune or lack is liquidated)"),
    ("F20", "Return (The hero returns)"),
    ("F21", "Pursuit (The hero is pursued)"),
    ("F22", "Rescue (The hero is rescued from pursuit)"),
    ("F23", "Unrecognized Arrival (The hero arrives unrecognized)"),
    ("F24", "Unfounded Claims (A false hero presents unfounded claims)"),
    ("F25", "Difficult Task (A difficult task is proposed to the hero)"),
    ("F26", "Solution (The task is resolved)"),
    ("F27", "Recognition (The hero is recognized)"),
    ("F28", "Exposure (The false hero or villain is exposed)"),
    ("F29", "Transfiguration (The hero is given a new appearance)"),
    ("F30", "Punishment (The villain is punished)"),
    ("F31", "Wedding (The hero is married or rewarded)"),
];
