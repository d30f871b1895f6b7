//! ASCII art shown between prompts.

use trail_game::{Ending, Landmark, Profession};

pub const TITLE: &str = r"
  __        __                       _____          _ _
  \ \      / /_ _  __ _  ___  _ __  |_   _| __ __ _(_) |
   \ \ /\ / / _` |/ _` |/ _ \| '_ \   | || '__/ _` | | |
    \ V  V / (_| | (_| | (_) | | | |  | || | | (_| | | |
     \_/\_/ \__,_|\__, |\___/|_| |_|  |_||_|  \__,_|_|_|
                  |___/       Fort Boise to Oregon City
";

pub const WAGON: &str = r"
                 _______________________
                /                       \
               /   ____________________  \
              |   |                    |  |
        ,__,  |   |  OREGON OR BUST    |  |
       (oo)___|   |____________________|  |
       (__)   )\___________________________|
          ||--|| \   (O)           (O)
";

pub const RIVER: &str = r"
   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
     ~~~~      ~~~~~~        ~~~~~~~      ~~~~~
   ~~~~~~~~~~~~~   A river blocks the trail  ~~~~~~~~
     ~~~~~~       ~~~~~~~~       ~~~~~~      ~~~~
   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

const FORT: &str = r"
         |>>>                        |>>>
         |                           |
     _  _|_  _                   _  _|_  _
    |;|_|;|_|;|                 |;|_|;|_|;|
    \\.    .  /_________________\\.    .  /
     \\:  .  /  |  |  |  |  |  | \\:  .  /
      ||:   |___|__|__|__|__|__|__||:   |
      ||:  .|        [  ]         ||:  .|
";

const FORT_BOISE: &str = r"
      |>>>
   _  _|_  _
  |;|_|;|_|;|     FORT BOISE
  \\.    .  /
   ||:  .|        the trail starts here
";

const OREGON_CITY: &str = r"
     _/\_      _/\_      _/\_
    |[][]|____|[][]|____|[][]|
    |    | [] |    | [] |    |     OREGON CITY
  ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

pub const GRAVESTONE: &str = r"
          _____
         /     \
        |  R.I.P |
        |        |
        |        |
       _|________|_
";

pub const DEER: &str = r"
         /|       |\
      `__\\       //__'
         ||      ||
       \__`\     |'__/
         `_\\   //_'
         _.,:---;,._
         \_:     :_/
           |@. .@|
           |     |
           ,\.-./ \
           ;;`-'   `---__________-----.-.
           ;;;                         \_\
           ';;;                         |
            ;    |                      ;
             \   \     \        |      /
              \_, \    /        \     |\
                |';|  |,,,,,,,,/ \    \ \_
                |  |  |           \   /   |
                \  \  |           |  / \  |
                 | || |           | |   | |
                 | || |           | |   | |
                 | || |           | |   | |
                 |_||_|           |_|   |_|
";

const BANKER: &str = r"
        _____
       |     |
      _|_____|_
       ( o o )      $$$
        \ - /      $$$$$
      __/   \__     $$$
     /  | $ |  \
";

const CARPENTER: &str = r"
        _____
       /_____\
       ( o o )     ___
        \ - /     |___|===
      __/   \__      ||
     /  |===|  \     ||
";

const FARMER: &str = r"
       _______
      /_______\
       ( o o )       \|/
        \ - /       --*--
      __/   \__      /|\
     /  |_|_|  \      |
";

const CELEBRATE: &str = r"
      *    .  *       .   *    .     *
   .     \o/     \o/     \o/     \o/    .
     *    |       |       |       |   *
   .     / \     / \     / \     / \     .
      Acres of free, fertile farmland!
";

const STARVED: &str = r"
        .-------------------.
        |   the food barrel  |
        |      is empty      |
        '-------------------'
";

const PERISHED: &str = r"
     _____      _____      _____      _____
    / RIP \    / RIP \    / RIP \    / RIP \
    |     |    |     |    |     |    |     |
   _|_____|_  _|_____|_  _|_____|_  _|_____|_
";

const NO_COWS: &str = r"
       _______________
      |               |      (no oxen)
      |    WAGON      |
      |_______________|
        (O)       (O)    . . . . . . .
";

const FROZE: &str = r"
     *  .  *   .  *   .  *   .  *  .  *
       /\      /\  *   /\     /\   *
    * /  \  * /  \    /  \ * /  \     .
     /    \  /    \  /    \ /    \  *
    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

#[must_use]
pub const fn profession(profession: Profession) -> &'static str {
    match profession {
        Profession::Banker => BANKER,
        Profession::Carpenter => CARPENTER,
        Profession::Farmer => FARMER,
    }
}

/// Art for a landmark arrival, if it has any.
#[must_use]
pub const fn landmark(landmark: Landmark) -> Option<&'static str> {
    match landmark {
        Landmark::TheDalles | Landmark::FortWallaWalla => Some(FORT),
        Landmark::FortBoise => Some(FORT_BOISE),
        Landmark::River => Some(RIVER),
        Landmark::OregonCity => Some(OREGON_CITY),
    }
}

#[must_use]
pub const fn ending(ending: Ending) -> &'static str {
    match ending {
        Ending::Stuck => NO_COWS,
        Ending::Starved => STARVED,
        Ending::GrimFate => PERISHED,
        Ending::Oregon => CELEBRATE,
        Ending::Frozen => FROZE,
        Ending::Dysentery => GRAVESTONE,
    }
}
