use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::reveal::Reveal;
use crate::{
    content::{CardDesign, CardStyle, CARD_DESIGNS, DESIGN_SPECS},
    motion::{Transition, Variant},
};

#[component]
pub fn BusinessCardsPage() -> impl IntoView {
    view! {
        <Title text="Vintage Business Cards" />
        <div class="min-h-screen bg-gradient-to-br from-amber-50 via-orange-50 to-red-50 flex items-center justify-center p-8">
            <div class="max-w-6xl mx-auto">
                <Reveal
                    on_mount=true
                    hidden=Variant::RISE_HIDDEN
                    transition=Transition::HEADER
                    class="text-center mb-12"
                >
                    <A
                        href="/"
                        attr:class="inline-block mb-6 text-sm text-amber-800 hover:text-amber-950 underline-offset-4 hover:underline"
                    >
                        "← Back to portfolio"
                    </A>
                    <h1 class="text-4xl md:text-6xl font-bold text-amber-900 mb-4">
                        "Vintage Business Card Collection"
                    </h1>
                    <p class="text-xl text-amber-700 max-w-2xl mx-auto">
                        "Classic elegance meets timeless sophistication in these meticulously crafted designs"
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                    {CARD_DESIGNS
                        .iter()
                        .enumerate()
                        .map(|(index, design)| {
                            let delay = (index + 1) as f64 * 0.1;
                            view! {
                                <Reveal
                                    on_mount=true
                                    hidden=Variant::CARD_HIDDEN
                                    transition=Transition::ITEM.with_delay(delay)
                                    class="perspective-1000"
                                >
                                    <BusinessCard design />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal
                    on_mount=true
                    hidden=Variant::PANEL_HIDDEN
                    transition=Transition::HEADER.with_delay(0.8)
                    class="bg-white/90 backdrop-blur-sm rounded-2xl p-8 shadow-xl border border-amber-200"
                >
                    <h3 class="text-2xl font-bold text-amber-900 mb-6 text-center">
                        "Design Specifications"
                    </h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {DESIGN_SPECS
                            .iter()
                            .map(|spec| {
                                view! {
                                    <div class="text-center">
                                        <div class="w-16 h-16 bg-amber-100 rounded-full flex items-center justify-center mx-auto mb-3">
                                            <span class="text-2xl">{spec.icon}</span>
                                        </div>
                                        <h4 class="font-bold text-amber-800 mb-2">{spec.heading}</h4>
                                        <p class="text-sm text-amber-700">
                                            {spec.lines[0]} <br /> {spec.lines[1]}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn BusinessCard(design: &'static CardDesign) -> impl IntoView {
    let palette = &design.palette;
    // content padding leaves room for each design's emblem
    let content_pad = match design.style {
        CardStyle::RetroTypography => "pt-16",
        CardStyle::ClassicMonogram => "pt-24",
        _ => "pt-20",
    };

    view! {
        <div class="vintage-card-container group cursor-pointer">
            <div class=format!(
                "vintage-card {} shadow-2xl transform-style-3d transition-transform duration-500 group-hover:rotate-y-12",
                palette.surface,
            )>
                <Ornament design />
                <div class=format!("relative z-10 p-6 {content_pad} text-center")>
                    <h2 class=format!("{} mb-1", palette.name)>{design.name}</h2>
                    <Divider design />
                    <p class=format!("{} mb-3", palette.title)>{design.title}</p>
                    <div class=format!("{} space-y-1", palette.details)>
                        {design.details.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Divider(design: &'static CardDesign) -> impl IntoView {
    let rule = design.palette.rule;
    match design.style {
        CardStyle::ClassicOrnate | CardStyle::LuxuryGold => {
            view! { <div class=format!("w-16 h-0.5 {rule} mx-auto mb-2")></div> }.into_any()
        }
        CardStyle::RetroTypography => {
            view! { <div class=format!("w-20 h-1 {rule} mx-auto mb-2")></div> }.into_any()
        }
        CardStyle::ArtDeco => view! {
            <div class="flex justify-center mb-2">
                <div class=format!("w-8 h-0.5 {rule}")></div>
                <div class=format!("w-2 h-2 {rule} rotate-45 mx-2 -mt-0.5")></div>
                <div class=format!("w-8 h-0.5 {rule}")></div>
            </div>
        }
        .into_any(),
        CardStyle::Victorian => view! {
            <div class="flex justify-center items-center mb-2">
                <div class=format!("w-6 h-0.5 {rule}")></div>
                <div class="mx-2 text-emerald-700">"❦"</div>
                <div class=format!("w-6 h-0.5 {rule}")></div>
            </div>
        }
        .into_any(),
        CardStyle::ClassicMonogram => view! {
            <div class="flex justify-center items-center mb-2">
                <div class=format!("w-8 h-0.5 {rule}")></div>
                <div class=format!("mx-2 w-2 h-2 {rule} rounded-full")></div>
                <div class=format!("w-8 h-0.5 {rule}")></div>
            </div>
        }
        .into_any(),
    }
}

/// Borders, corner flourishes and the emblem drawn behind a card's text.
#[component]
fn Ornament(design: &'static CardDesign) -> impl IntoView {
    let emblem = design.emblem;
    match design.style {
        CardStyle::ClassicOrnate => view! {
            <div class="absolute inset-2 border-2 border-amber-700 rounded-sm">
                <div class="absolute inset-1 border border-amber-600 rounded-sm opacity-60"></div>
            </div>
            <div class="absolute top-3 left-3 w-6 h-6 border-l-2 border-t-2 border-amber-800 rounded-tl-lg"></div>
            <div class="absolute top-3 right-3 w-6 h-6 border-r-2 border-t-2 border-amber-800 rounded-tr-lg"></div>
            <div class="absolute bottom-3 left-3 w-6 h-6 border-l-2 border-b-2 border-amber-800 rounded-bl-lg"></div>
            <div class="absolute bottom-3 right-3 w-6 h-6 border-r-2 border-b-2 border-amber-800 rounded-br-lg"></div>
            <div class="absolute top-4 left-1/2 -translate-x-1/2">
                <div class="w-12 h-12 bg-amber-800 rounded-full flex items-center justify-center">
                    <div class="w-8 h-8 bg-amber-100 rounded-full flex items-center justify-center">
                        <span class="text-amber-800 font-bold text-lg">{emblem}</span>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex space-x-1">
                <div class="w-1 h-1 bg-amber-700 rounded-full"></div>
                <div class="w-1 h-1 bg-amber-700 rounded-full"></div>
                <div class="w-1 h-1 bg-amber-700 rounded-full"></div>
            </div>
        }
        .into_any(),
        CardStyle::ArtDeco => view! {
            <div class="absolute inset-0 opacity-20">
                <div class="absolute top-0 left-0 w-full h-8 bg-gradient-to-r from-transparent via-yellow-400 to-transparent -skew-y-12"></div>
                <div class="absolute bottom-0 right-0 w-full h-8 bg-gradient-to-l from-transparent via-yellow-400 to-transparent skew-y-12"></div>
            </div>
            <div class="absolute inset-3 border border-yellow-500">
                <div class="absolute -top-1 -left-1 w-4 h-4 bg-yellow-600 rotate-45"></div>
                <div class="absolute -top-1 -right-1 w-4 h-4 bg-yellow-600 rotate-45"></div>
                <div class="absolute -bottom-1 -left-1 w-4 h-4 bg-yellow-600 rotate-45"></div>
                <div class="absolute -bottom-1 -right-1 w-4 h-4 bg-yellow-600 rotate-45"></div>
            </div>
            <div class="absolute top-6 left-1/2 -translate-x-1/2">
                <div class="w-10 h-10 bg-yellow-600 rotate-45 flex items-center justify-center">
                    <div class="w-6 h-6 bg-slate-800 -rotate-45 flex items-center justify-center">
                        <span class="text-yellow-400 font-bold text-xs">{emblem}</span>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex items-center space-x-1">
                <div class="w-2 h-0.5 bg-yellow-500"></div>
                <div class="w-1 h-1 bg-yellow-500 rounded-full"></div>
                <div class="w-2 h-0.5 bg-yellow-500"></div>
            </div>
        }
        .into_any(),
        CardStyle::Victorian => view! {
            <div class="absolute inset-2 border-2 border-emerald-700 rounded-lg">
                <div class="absolute inset-2 border border-emerald-600 rounded-lg opacity-60"></div>
                <div class="absolute -top-2 -left-2 w-4 h-4 bg-emerald-800 rounded-full"></div>
                <div class="absolute -top-2 -right-2 w-4 h-4 bg-emerald-800 rounded-full"></div>
                <div class="absolute -bottom-2 -left-2 w-4 h-4 bg-emerald-800 rounded-full"></div>
                <div class="absolute -bottom-2 -right-2 w-4 h-4 bg-emerald-800 rounded-full"></div>
            </div>
            <div class="absolute top-4 left-1/2 -translate-x-1/2">
                <div class="w-14 h-12 bg-emerald-800 rounded-t-full relative">
                    <div class="absolute inset-1 bg-emerald-100 rounded-t-full flex items-center justify-center">
                        <div class="text-center">
                            <div class="text-emerald-800 font-bold text-xs">{emblem}</div>
                            <div class="w-6 h-0.5 bg-emerald-700 mx-auto"></div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 text-emerald-700 text-lg">
                "❦"
            </div>
        }
        .into_any(),
        CardStyle::RetroTypography => view! {
            <div class="absolute inset-0 opacity-10">
                <div class="absolute top-0 w-full h-1 bg-red-600"></div>
                <div class="absolute top-2 w-full h-0.5 bg-red-500"></div>
                <div class="absolute bottom-0 w-full h-1 bg-red-600"></div>
                <div class="absolute bottom-2 w-full h-0.5 bg-red-500"></div>
            </div>
            <div class="absolute top-5 left-1/2 -translate-x-1/2">
                <div class="w-16 h-8 bg-red-800 rounded-full flex items-center justify-center">
                    <span class="text-orange-100 font-bold text-xs tracking-wider">{emblem}</span>
                </div>
            </div>
            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex space-x-1">
                <div class="w-2 h-2 bg-red-700 rounded-full"></div>
                <div class="w-2 h-2 bg-red-600 rounded-full"></div>
                <div class="w-2 h-2 bg-red-700 rounded-full"></div>
            </div>
        }
        .into_any(),
        CardStyle::ClassicMonogram => view! {
            <div class="absolute inset-3 border-2 border-indigo-700">
                <div class="absolute inset-2 border border-indigo-600 opacity-60"></div>
            </div>
            <div class="absolute top-6 left-1/2 -translate-x-1/2">
                <div class="w-16 h-16 bg-indigo-800 rounded-full flex items-center justify-center relative">
                    <div class="w-12 h-12 bg-indigo-100 rounded-full flex items-center justify-center">
                        <span class="text-indigo-800 font-bold text-xl font-serif">{emblem}</span>
                    </div>
                    <div class="absolute inset-0 border-2 border-indigo-600 rounded-full"></div>
                </div>
            </div>
        }
        .into_any(),
        CardStyle::LuxuryGold => view! {
            <div class="absolute inset-0 bg-gradient-to-br from-yellow-400/20 via-transparent to-yellow-600/20"></div>
            <div class="absolute inset-2 border-2 border-yellow-400">
                <div class="absolute inset-1 border border-yellow-300 opacity-60"></div>
            </div>
            <div class="absolute top-4 left-1/2 -translate-x-1/2 text-yellow-500 text-3xl leading-none">
                {emblem}
            </div>
            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 w-8 h-1 bg-gradient-to-r from-transparent via-yellow-500 to-transparent"></div>
        }
        .into_any(),
    }
}
