use rentview_types::RentalMethod;
use serde::Serialize;
use std::fmt;

/// Collateralized mechanism, verbatim marketplace copy.
pub const COLLATERALIZED: RentalMethod = RentalMethod {
    description: "On collateralized loans, the renter is able to own the NFT by paying the rental price and putting up collateral to safeguard the lenter if he doesn\u{2019}t return the NFT.",
    steps: &[
        "The lenter transfers his NFT to an escrow smart contract where the collateral value and the rental rate are also defined.",
        "The renter transfers the collateral value and the rental value associated with the rental period to the escrow smart contract. The renter will then receive ownership of the NFT",
        "Once the rental period ends, the lenter is able to claim the rental value while the renter must return te NFT to the escrow smart contract. If the NFT hasn\u{2019}t been returned, the lenter is able to claim the collateral value as well.",
    ],
    advantages: &[
        "By actually owning the NFT, the renter can access all of its utility regardless of support for rental protocols",
    ],
    disadvantages: &[
        "There is a high financial entry barrier for the renter",
        "The lenter risks losing the NFT, which can be specially damaging if the NFT price surges ahead of the collateral",
    ],
};

/// Non-collateralized mechanism, verbatim marketplace copy.
pub const NON_COLLATERALIZED: RentalMethod = RentalMethod {
    description: "On non-collateralized loans, the renter pays the rental price and receives a wrapped token with the same properties as the NFT. The NFT remains on an escrow smart contract which can be accessed by the owner.",
    steps: &[
        "The lenter transfers his NFT to an escrow smart contract where the rental rate is also defined.",
        "The renter transfer the rental value associated with the rental period to the escrow smart contract. The renter will then receive a wrapped token representing the NFT",
        "Once the rental period ends, the lenter is able to claim the rental value as well as its NFT while the renter becomes unable to use the wrapped token. If the lenter wishes he can leave the NFT on the smart contract for others to rent it using the same dynamic.",
    ],
    advantages: &[
        "The lenter remains in control of the NFT",
        "The renter becomes automatically unable to use the NFT once the rental period ends",
    ],
    disadvantages: &[
        "The ecosystem will have to adopt the standard in order to become usable",
    ],
};

/// Title shown above the rental-methods carousel.
///
/// A deliberate 2-cycle companion to the two-slide carousel: both
/// navigation directions flip it, and it does not track the widget's own
/// slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MethodTitle {
    #[default]
    Collateralized,
    NonCollateralized,
}

impl MethodTitle {
    pub fn toggle(self) -> Self {
        match self {
            MethodTitle::Collateralized => MethodTitle::NonCollateralized,
            MethodTitle::NonCollateralized => MethodTitle::Collateralized,
        }
    }

    /// The method record this title fronts.
    pub fn method(self) -> &'static RentalMethod {
        match self {
            MethodTitle::Collateralized => &COLLATERALIZED,
            MethodTitle::NonCollateralized => &NON_COLLATERALIZED,
        }
    }
}

impl fmt::Display for MethodTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodTitle::Collateralized => write!(f, "Collateralized"),
            MethodTitle::NonCollateralized => write!(f, "Non-Collateralized"),
        }
    }
}

/// Navigation callbacks owned by the carousel widget.
pub trait SlideControls {
    fn previous_slide(&mut self);
    fn next_slide(&mut self);
}

/// Wires the title toggle to a carousel's navigation controls.
///
/// Both directions flip the title before delegating, which keeps the label
/// in step with a two-slide wrap-around rotation.
#[derive(Debug)]
pub struct MethodCarousel<C: SlideControls> {
    controls: C,
    title: MethodTitle,
}

impl<C: SlideControls> MethodCarousel<C> {
    pub fn new(controls: C) -> Self {
        Self {
            controls,
            title: MethodTitle::default(),
        }
    }

    pub fn title(&self) -> MethodTitle {
        self.title
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn previous(&mut self) {
        self.title = self.title.toggle();
        self.controls.previous_slide();
    }

    pub fn next(&mut self) {
        self.title = self.title.toggle();
        self.controls.next_slide();
    }
}
