//! Mint page
//!
//! The whole user-facing surface: connect control, amount field, the
//! phase-labelled mint button, inline error text, the live supply counter,
//! and the flip card that turns over once the receipt confirms.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::{BackCard, FlipCard, FrontCard};
use crate::services::contract;
use crate::services::wallet::{self, WalletState};
use crate::state::mint::MintFlow;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{ETHERSCAN_TX_BASE, OPENSEA_ASSET_BASE, SUPPLY_POLL_INTERVAL_MS};
use crate::utils::format::{format_supply, truncate_address};

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let flow = RwSignal::new(MintFlow::new());
    let (total_minted, set_total_minted) = signal(0u64);

    // Mirror wallet session changes into the flow: connect arms it,
    // disconnect is a full reset, an account switch is a fresh session.
    Effect::new(move || match wallet_ctx.address() {
        Some(address) => flow.update(|f| f.wallet_connected(address)),
        None => flow.update(|f| f.wallet_disconnected()),
    });

    // Live supply subscription. Display-only and eventually consistent; it
    // runs independently of the mint flow.
    leptos::task::spawn_local(async move {
        loop {
            match contract::total_supply().await {
                Ok(total) => set_total_minted.set(total),
                Err(e) => log!("total supply poll failed: {}", e),
            }
            gloo_timers::future::TimeoutFuture::new(SUPPLY_POLL_INTERVAL_MS).await;
        }
    });

    let connect = move |_| {
        wallet_ctx.set_connecting();
        leptos::task::spawn_local(async move {
            match wallet::connect().await {
                Ok(address) => {
                    log!("wallet connected: {}", address);
                    wallet_ctx.set_connected(address);
                }
                Err(e) => {
                    log!("wallet connection failed: {}", e);
                    wallet_ctx.set_error(e);
                }
            }
        });
    };

    let disconnect = move |_| {
        log!("wallet disconnected by user");
        wallet_ctx.disconnect();
    };

    let on_amount_change = move |ev| {
        let raw = event_target_value(&ev);
        // normalize clamps bad input; the bound field shows the correction
        flow.update(|f| {
            f.set_amount(&raw);
        });
    };

    let mint = move |_| {
        // the guard denies while an attempt is in flight or confirmed
        let Some(call) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        log!("submitting mint, value {}", call.value);
        leptos::task::spawn_local(async move {
            match contract::submit_mint(&call).await {
                Ok(hash) => {
                    log!("mint broadcast: {}", hash);
                    flow.update(|f| f.on_submitted(hash.clone()));
                    match contract::await_receipt(&hash).await {
                        Ok(receipt) => {
                            log!("mint confirmed: {}", receipt.transaction_hash);
                            flow.update(|f| f.on_confirmed(&receipt));
                        }
                        Err(e) => {
                            log!("mint failed after broadcast: {}", e);
                            flow.update(|f| f.on_tx_error(&e));
                        }
                    }
                }
                Err(e) => {
                    log!("signing failed: {}", e);
                    flow.update(|f| f.on_sign_error(&e));
                }
            }
        });
    };

    let is_minted = Signal::derive(move || flow.with(|f| f.is_minted()));

    view! {
        <div class="page">
            <div class="container">
                <div style="flex: 1 1 auto;">
                    <div style="padding: 24px 24px 24px 0;">
                        <h1>"Merge Day NFT"</h1>
                        <p style="margin: 12px 0 24px;">
                            {move || format_supply(total_minted.get())}
                        </p>

                        {move || match wallet_ctx.wallet.get() {
                            WalletState::Connected { address } => view! {
                                <button class="button" on:click=disconnect>
                                    {truncate_address(&address)} " · Disconnect"
                                </button>
                            }
                            .into_any(),
                            WalletState::Connecting => view! {
                                <button class="button" disabled=true>"Connecting..."</button>
                            }
                            .into_any(),
                            WalletState::Error(e) => view! {
                                <div>
                                    <button class="button" on:click=connect>"Connect Wallet"</button>
                                    <p style="margin-top: 12px; color: #FF6257;">{e}</p>
                                </div>
                            }
                            .into_any(),
                            WalletState::Disconnected => view! {
                                <button class="button" on:click=connect>"Connect Wallet"</button>
                            }
                            .into_any(),
                        }}

                        {move || {
                            flow.with(|f| f.mint_error().map(|e| e.to_string())).map(|err| view! {
                                <p style="margin-top: 24px; color: #FF6257;">"Error: " {err}</p>
                            })
                        }}
                        {move || {
                            flow.with(|f| f.tx_error().map(|e| e.to_string())).map(|err| view! {
                                <p style="margin-top: 24px; color: #FF6257;">"Error: " {err}</p>
                            })
                        }}

                        {move || {
                            (wallet_ctx.is_connected() && !is_minted.get()).then(|| view! {
                                <div style="align-items: center;">
                                    <input
                                        style="width: 70%; padding: 7px; margin: 5px 5px 5px 0; border-radius: 10px;"
                                        aria-label="Amount (ether)"
                                        placeholder="Pay 0.05 or more"
                                        prop:value=move || flow.with(|f| f.amount().raw.clone())
                                        on:input=on_amount_change
                                    />
                                    <button
                                        class="button"
                                        style="margin-top: 24px;"
                                        disabled=move || !flow.with(|f| f.can_mint())
                                        on:click=mint
                                    >
                                        {move || flow.with(|f| f.button_label())}
                                    </button>
                                </div>
                            })
                        }}
                    </div>
                </div>

                <div style="flex: 0 0 auto;">
                    <FlipCard>
                        <FrontCard flipped=is_minted>
                            <img src="/nft.png" width="512" height="512" alt="Merge Day NFT"/>
                            <h1 style="margin-top: 24px;">"Merge Day NFT"</h1>
                        </FrontCard>
                        <BackCard flipped=is_minted>
                            <div style="padding: 24px;">
                                <img
                                    src="/nft.png"
                                    width="80"
                                    height="80"
                                    alt="Merge Day NFT"
                                    style="border-radius: 8px;"
                                />
                                <h2 style="margin-top: 24px; margin-bottom: 6px;">"NFT Minted!"</h2>
                                <p style="margin-bottom: 24px;">
                                    "Your NFT will show up in your wallet in the next few minutes."
                                </p>
                                <p style="margin-bottom: 6px;">
                                    "View on "
                                    <a href=move || {
                                        flow.with(|f| {
                                            format!("{}{}", ETHERSCAN_TX_BASE, f.tx_hash().unwrap_or_default())
                                        })
                                    }>"Etherscan"</a>
                                </p>
                                <p>
                                    "View on "
                                    <a href=move || {
                                        flow.with(|f| {
                                            format!("{}{}/1", OPENSEA_ASSET_BASE, f.receipt_to().unwrap_or_default())
                                        })
                                    }>"Opensea"</a>
                                </p>
                            </div>
                        </BackCard>
                    </FlipCard>
                </div>
            </div>
        </div>
    }
}
