//! Icon components using the Lucide icon set (https://lucide.dev)
//!
//! All icons stroke with currentColor, so they take their color from the
//! surrounding text class. Default size is w-5 h-5; override with `class`.

use dioxus::prelude::*;

/// Shared 24x24 stroked SVG frame
#[component]
fn IconSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn CameraIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

#[component]
pub fn UserIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn MinusIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class, path { d: "M5 12h14" } }
    }
}

#[component]
pub fn PlusIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

#[component]
pub fn ChevronLeftIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class, path { d: "m15 18-6-6 6-6" } }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class, path { d: "m9 18 6-6-6-6" } }
    }
}

#[component]
pub fn ClockIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 6v6l4 2" }
        }
    }
}

#[component]
pub fn FlameIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
        }
    }
}

#[component]
pub fn SaladIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M7 21h10" }
            path { d: "M12 21a9 9 0 0 0 9-9H3a9 9 0 0 0 9 9Z" }
            path { d: "M11.38 12a2.4 2.4 0 0 1-.4-4.77 2.4 2.4 0 0 1 3.2-2.77 2.4 2.4 0 0 1 3.47-.63 2.4 2.4 0 0 1 3.37 3.37 2.4 2.4 0 0 1-1.1 3.7 2.51 2.51 0 0 1 .03 1.1" }
            path { d: "m13 12 4-4" }
        }
    }
}

#[component]
pub fn TimerIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M10 2h4" }
            path { d: "M12 14l3-3" }
            circle { cx: "12", cy: "14", r: "8" }
        }
    }
}

/// Speaker with sound waves (narration off)
#[component]
pub fn VolumeIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M11 5 6 9H2v6h4l5 4V5z" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        }
    }
}

#[component]
pub fn PlayIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" }
        }
    }
}

#[component]
pub fn PauseIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            rect { x: "14", y: "4", width: "4", height: "16", rx: "1" }
            rect { x: "6", y: "4", width: "4", height: "16", rx: "1" }
        }
    }
}

#[component]
pub fn XIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn SendIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        }
    }
}

#[component]
pub fn MusicIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        }
    }
}

#[component]
pub fn DownloadIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "m7 10 5 5 5-5" }
            path { d: "M12 15V3" }
        }
    }
}

#[component]
pub fn LogInIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4" }
            path { d: "m10 17 5-5-5-5" }
            path { d: "M15 12H3" }
        }
    }
}

#[component]
pub fn SmartphoneIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            rect { x: "5", y: "2", width: "14", height: "20", rx: "2" }
            path { d: "M12 18h.01" }
        }
    }
}

#[component]
pub fn CrownIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z" }
            path { d: "M5 20h14" }
        }
    }
}

#[component]
pub fn HistoryIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" }
            path { d: "M3 3v5h5" }
            path { d: "M12 7v5l4 2" }
        }
    }
}

#[component]
pub fn TrashIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" }
            path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
            path { d: "M10 11v6" }
            path { d: "M14 11v6" }
        }
    }
}

#[component]
pub fn CheckIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class, path { d: "M20 6 9 17l-5-5" } }
    }
}
