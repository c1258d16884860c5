use deck52::{Card, Deck, Hand, Seat};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck<ChaCha8Rng>,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::from_seed(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.deck = Deck::from_seed(seed as u64);
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    pub fn size(&self) -> u32 {
        self.deck.size() as u32
    }

    pub fn deal_card(&mut self) -> Result<JsValue, JsValue> {
        let card = self.deck.deal_card().map(card_to_js);
        to_js_value(&card)
    }

    pub fn remaining(&self) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self.deck.remaining().iter().copied().map(card_to_js).collect();
        to_js_value(&cards)
    }

    pub fn deal_bridge(&mut self) -> Result<JsValue, JsValue> {
        let hands = deck52::deal_bridge(&mut self.deck);
        let seats: Vec<JsSeat> = Seat::ALL
            .iter()
            .zip(&hands)
            .map(|(seat, hand)| JsSeat::from_hand(*seat, hand))
            .collect();
        to_js_value(&seats)
    }
}

#[derive(Serialize)]
struct JsCard {
    index: u8,
    suit: &'static str,
    rank: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsSeat {
    seat: &'static str,
    cards: Vec<JsCard>,
    text: String,
}

impl JsSeat {
    fn from_hand(seat: Seat, hand: &Hand) -> Self {
        Self {
            seat: seat.name(),
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            text: hand.to_string(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        index: card.index(),
        suit: card.suit().name(),
        rank: card.rank().name(),
        label: card.to_string(),
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
