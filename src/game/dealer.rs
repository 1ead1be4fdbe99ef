use super::GameState;

impl GameState {
    /// Plays out the dealer's hand according to the fixed house policy.
    ///
    /// The dealer draws while their score is below 17 and stands at 17
    /// or higher, including soft 17. Busting past 21 also stops the
    /// loop, since a bust score is above 17. If the deck runs dry the
    /// dealer stops early with whatever they hold.
    #[must_use]
    pub fn dealers_turn(mut self) -> Self {
        while self.dealer_hand().score() < 17 && !self.deck().is_empty() {
            self = self.dealer_hits();
        }
        self
    }
}
