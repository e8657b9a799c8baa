use anchor_lang::prelude::*;

#[error_code]
pub enum CanvasError {
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Flow rate must be strictly positive")]
    InvalidFlowRate,

    #[msg("Stream call data did not decode to a tile purchase")]
    InvalidPurchaseData,

    #[msg("Tile URI exceeds the maximum length")]
    UriTooLong,

    #[msg("Tile id is below the canvas genesis tile")]
    TileBelowGenesis,

    #[msg("Offered price is below the current asking price")]
    PriceTooLow,

    #[msg("Wrapped mint is not controlled by the wrap authority")]
    InvalidSuperToken,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Wrapped supply underflow on downgrade")]
    InsufficientWrappedSupply,

    #[msg("Host address does not match the registered host config")]
    HostMismatch,

    #[msg("Super token address does not match the registered wrapped mint")]
    SuperTokenMismatch,

    #[msg("Redirect config is not bound to this canvas")]
    RedirectMismatch,

    #[msg("Flow does not belong to this sender")]
    FlowSenderMismatch,

    #[msg("Only the tile owner may change its price")]
    NotTileOwner,

    #[msg("Token account is not held by the expected owner")]
    TokenAccountOwnerMismatch,
}
