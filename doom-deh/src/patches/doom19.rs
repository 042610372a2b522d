//! Shared constant tables of the Doom v1.9 executable family
//!
//! Bulk literal data only; the accessor logic lives in the per-version
//! modules. Every entry mirrors the original executable's data segment:
//! sound and sprite name order, thing stat blocks, weapon state wiring
//! and the full animation state table. Cross-references are validated at
//! version construction time.

#![allow(clippy::enum_glob_use, clippy::wildcard_imports)]

use crate::types::{
    ActionPointer, Ammo, AmmoKind, Miscellany, Sound, State, Thing, ThingFlags, Weapon,
};
use crate::types::ActionPointer::*;

/// Sprite catalog indices, in executable order
#[allow(dead_code)]
pub(crate) mod sprite {
    pub const TROO: usize = 0;
    pub const SHTG: usize = 1;
    pub const PUNG: usize = 2;
    pub const PISG: usize = 3;
    pub const PISF: usize = 4;
    pub const SHTF: usize = 5;
    pub const SHT2: usize = 6;
    pub const CHGG: usize = 7;
    pub const CHGF: usize = 8;
    pub const MISG: usize = 9;
    pub const MISF: usize = 10;
    pub const SAWG: usize = 11;
    pub const PLSG: usize = 12;
    pub const PLSF: usize = 13;
    pub const BFGG: usize = 14;
    pub const BFGF: usize = 15;
    pub const BLUD: usize = 16;
    pub const PUFF: usize = 17;
    pub const BAL1: usize = 18;
    pub const BAL2: usize = 19;
    pub const PLSS: usize = 20;
    pub const PLSE: usize = 21;
    pub const MISL: usize = 22;
    pub const BFS1: usize = 23;
    pub const BFE1: usize = 24;
    pub const BFE2: usize = 25;
    pub const TFOG: usize = 26;
    pub const IFOG: usize = 27;
    pub const PLAY: usize = 28;
    pub const POSS: usize = 29;
    pub const SPOS: usize = 30;
    pub const VILE: usize = 31;
    pub const FIRE: usize = 32;
    pub const FATB: usize = 33;
    pub const FBXP: usize = 34;
    pub const SKEL: usize = 35;
    pub const MANF: usize = 36;
    pub const FATT: usize = 37;
    pub const CPOS: usize = 38;
    pub const SARG: usize = 39;
    pub const HEAD: usize = 40;
    pub const BAL7: usize = 41;
    pub const BOSS: usize = 42;
    pub const BOS2: usize = 43;
    pub const SKUL: usize = 44;
    pub const SPID: usize = 45;
    pub const BSPI: usize = 46;
    pub const APLS: usize = 47;
    pub const APBX: usize = 48;
    pub const CYBR: usize = 49;
    pub const PAIN: usize = 50;
    pub const SSWV: usize = 51;
    pub const KEEN: usize = 52;
    pub const BBRN: usize = 53;
    pub const BOSF: usize = 54;
    pub const ARM1: usize = 55;
    pub const ARM2: usize = 56;
    pub const BAR1: usize = 57;
    pub const BEXP: usize = 58;
    pub const FCAN: usize = 59;
    pub const BON1: usize = 60;
    pub const BON2: usize = 61;
    pub const BKEY: usize = 62;
    pub const RKEY: usize = 63;
    pub const YKEY: usize = 64;
    pub const BSKU: usize = 65;
    pub const RSKU: usize = 66;
    pub const YSKU: usize = 67;
    pub const STIM: usize = 68;
    pub const MEDI: usize = 69;
    pub const SOUL: usize = 70;
    pub const PINV: usize = 71;
    pub const PSTR: usize = 72;
    pub const PINS: usize = 73;
    pub const MEGA: usize = 74;
    pub const SUIT: usize = 75;
    pub const PMAP: usize = 76;
    pub const PVIS: usize = 77;
    pub const CLIP: usize = 78;
    pub const AMMO: usize = 79;
    pub const ROCK: usize = 80;
    pub const BROK: usize = 81;
    pub const CELL: usize = 82;
    pub const CELP: usize = 83;
    pub const SHEL: usize = 84;
    pub const SBOX: usize = 85;
    pub const BPAK: usize = 86;
    pub const BFUG: usize = 87;
    pub const MGUN: usize = 88;
    pub const CSAW: usize = 89;
    pub const LAUN: usize = 90;
    pub const PLAS: usize = 91;
    pub const SHOT: usize = 92;
    pub const SGN2: usize = 93;
    pub const COLU: usize = 94;
    pub const SMT2: usize = 95;
    pub const GOR1: usize = 96;
    pub const POL2: usize = 97;
    pub const POL5: usize = 98;
    pub const POL4: usize = 99;
    pub const POL3: usize = 100;
    pub const POL1: usize = 101;
    pub const POL6: usize = 102;
    pub const GOR2: usize = 103;
    pub const GOR3: usize = 104;
    pub const GOR4: usize = 105;
    pub const GOR5: usize = 106;
    pub const SMIT: usize = 107;
    pub const COL1: usize = 108;
    pub const COL2: usize = 109;
    pub const COL3: usize = 110;
    pub const COL4: usize = 111;
    pub const CAND: usize = 112;
    pub const CBRA: usize = 113;
    pub const COL6: usize = 114;
    pub const TRE1: usize = 115;
    pub const TRE2: usize = 116;
    pub const ELEC: usize = 117;
    pub const CEYE: usize = 118;
    pub const FSKU: usize = 119;
    pub const COL5: usize = 120;
    pub const TBLU: usize = 121;
    pub const TGRN: usize = 122;
    pub const TRED: usize = 123;
    pub const SMBT: usize = 124;
    pub const SMGT: usize = 125;
    pub const SMRT: usize = 126;
    pub const HDB1: usize = 127;
    pub const HDB2: usize = 128;
    pub const HDB3: usize = 129;
    pub const HDB4: usize = 130;
    pub const HDB5: usize = 131;
    pub const HDB6: usize = 132;
    pub const POB1: usize = 133;
    pub const POB2: usize = 134;
    pub const BRS1: usize = 135;
    pub const TLMP: usize = 136;
    pub const TLP2: usize = 137;
}

/// Sound table indices (0 is the reserved silence)
#[allow(dead_code)]
pub(crate) mod sound {
    pub const PISTOL: usize = 1;
    pub const SHOTGN: usize = 2;
    pub const SGCOCK: usize = 3;
    pub const DSHTGN: usize = 4;
    pub const DBOPN: usize = 5;
    pub const DBCLS: usize = 6;
    pub const DBLOAD: usize = 7;
    pub const PLASMA: usize = 8;
    pub const BFG: usize = 9;
    pub const SAWUP: usize = 10;
    pub const SAWIDL: usize = 11;
    pub const SAWFUL: usize = 12;
    pub const SAWHIT: usize = 13;
    pub const RLAUNC: usize = 14;
    pub const RXPLOD: usize = 15;
    pub const FIRSHT: usize = 16;
    pub const FIRXPL: usize = 17;
    pub const PSTART: usize = 18;
    pub const PSTOP: usize = 19;
    pub const DOROPN: usize = 20;
    pub const DORCLS: usize = 21;
    pub const STNMOV: usize = 22;
    pub const SWTCHN: usize = 23;
    pub const SWTCHX: usize = 24;
    pub const PLPAIN: usize = 25;
    pub const DMPAIN: usize = 26;
    pub const POPAIN: usize = 27;
    pub const VIPAIN: usize = 28;
    pub const MNPAIN: usize = 29;
    pub const PEPAIN: usize = 30;
    pub const SLOP: usize = 31;
    pub const ITEMUP: usize = 32;
    pub const WPNUP: usize = 33;
    pub const OOF: usize = 34;
    pub const TELEPT: usize = 35;
    pub const POSIT1: usize = 36;
    pub const POSIT2: usize = 37;
    pub const POSIT3: usize = 38;
    pub const BGSIT1: usize = 39;
    pub const BGSIT2: usize = 40;
    pub const SGTSIT: usize = 41;
    pub const CACSIT: usize = 42;
    pub const BRSSIT: usize = 43;
    pub const CYBSIT: usize = 44;
    pub const SPISIT: usize = 45;
    pub const BSPSIT: usize = 46;
    pub const KNTSIT: usize = 47;
    pub const VILSIT: usize = 48;
    pub const MANSIT: usize = 49;
    pub const PESIT: usize = 50;
    pub const SKLATK: usize = 51;
    pub const SGTATK: usize = 52;
    pub const SKEPCH: usize = 53;
    pub const VILATK: usize = 54;
    pub const CLAW: usize = 55;
    pub const SKESWG: usize = 56;
    pub const PLDETH: usize = 57;
    pub const PDIEHI: usize = 58;
    pub const PODTH1: usize = 59;
    pub const PODTH2: usize = 60;
    pub const PODTH3: usize = 61;
    pub const BGDTH1: usize = 62;
    pub const BGDTH2: usize = 63;
    pub const SGTDTH: usize = 64;
    pub const CACDTH: usize = 65;
    pub const SKLDTH: usize = 66;
    pub const BRSDTH: usize = 67;
    pub const CYBDTH: usize = 68;
    pub const SPIDTH: usize = 69;
    pub const BSPDTH: usize = 70;
    pub const VILDTH: usize = 71;
    pub const KNTDTH: usize = 72;
    pub const PEDTH: usize = 73;
    pub const SKEDTH: usize = 74;
    pub const POSACT: usize = 75;
    pub const BGACT: usize = 76;
    pub const DMACT: usize = 77;
    pub const BSPACT: usize = 78;
    pub const BSPWLK: usize = 79;
    pub const VILACT: usize = 80;
    pub const NOWAY: usize = 81;
    pub const BAREXP: usize = 82;
    pub const PUNCH: usize = 83;
    pub const HOOF: usize = 84;
    pub const METAL: usize = 85;
    pub const CHGUN: usize = 86;
    pub const TINK: usize = 87;
    pub const BDOPN: usize = 88;
    pub const BDCLS: usize = 89;
    pub const ITMBK: usize = 90;
    pub const FLAME: usize = 91;
    pub const FLAMST: usize = 92;
    pub const GETPOW: usize = 93;
    pub const BOSPIT: usize = 94;
    pub const BOSCUB: usize = 95;
    pub const BOSSIT: usize = 96;
    pub const BOSPN: usize = 97;
    pub const BOSDTH: usize = 98;
    pub const MANATK: usize = 99;
    pub const MANDTH: usize = 100;
    pub const SSSIT: usize = 101;
    pub const SSDTH: usize = 102;
    pub const KEENPN: usize = 103;
    pub const KEENDT: usize = 104;
    pub const SKEACT: usize = 105;
    pub const SKESIT: usize = 106;
    pub const SKEATK: usize = 107;
    pub const RADIO: usize = 108;
}

/// State table indices of the named animation entry points
#[allow(dead_code)]
pub(crate) mod state {
    pub const NULL: usize = 0;
    pub const LIGHTDONE: usize = 1;
    pub const PUNCH: usize = 2;
    pub const PUNCHDOWN: usize = 3;
    pub const PUNCHUP: usize = 4;
    pub const PUNCH1: usize = 5;
    pub const PUNCH2: usize = 6;
    pub const PUNCH3: usize = 7;
    pub const PUNCH4: usize = 8;
    pub const PUNCH5: usize = 9;
    pub const PISTOL: usize = 10;
    pub const PISTOLDOWN: usize = 11;
    pub const PISTOLUP: usize = 12;
    pub const PISTOL1: usize = 13;
    pub const PISTOL2: usize = 14;
    pub const PISTOL3: usize = 15;
    pub const PISTOL4: usize = 16;
    pub const PISTOLFLASH: usize = 17;
    pub const SGUN: usize = 18;
    pub const SGUNDOWN: usize = 19;
    pub const SGUNUP: usize = 20;
    pub const SGUN1: usize = 21;
    pub const SGUN2: usize = 22;
    pub const SGUN3: usize = 23;
    pub const SGUN4: usize = 24;
    pub const SGUN5: usize = 25;
    pub const SGUN6: usize = 26;
    pub const SGUN7: usize = 27;
    pub const SGUN8: usize = 28;
    pub const SGUN9: usize = 29;
    pub const SGUNFLASH1: usize = 30;
    pub const SGUNFLASH2: usize = 31;
    pub const DSGUN: usize = 32;
    pub const DSGUNDOWN: usize = 33;
    pub const DSGUNUP: usize = 34;
    pub const DSGUN1: usize = 35;
    pub const DSGUN2: usize = 36;
    pub const DSGUN3: usize = 37;
    pub const DSGUN4: usize = 38;
    pub const DSGUN5: usize = 39;
    pub const DSGUN6: usize = 40;
    pub const DSGUN7: usize = 41;
    pub const DSGUN8: usize = 42;
    pub const DSGUN9: usize = 43;
    pub const DSGUN10: usize = 44;
    pub const DSNR1: usize = 45;
    pub const DSNR2: usize = 46;
    pub const DSGUNFLASH1: usize = 47;
    pub const DSGUNFLASH2: usize = 48;
    pub const CHAIN: usize = 49;
    pub const CHAINDOWN: usize = 50;
    pub const CHAINUP: usize = 51;
    pub const CHAIN1: usize = 52;
    pub const CHAIN2: usize = 53;
    pub const CHAIN3: usize = 54;
    pub const CHAINFLASH1: usize = 55;
    pub const CHAINFLASH2: usize = 56;
    pub const MISSILE: usize = 57;
    pub const MISSILEDOWN: usize = 58;
    pub const MISSILEUP: usize = 59;
    pub const MISSILE1: usize = 60;
    pub const MISSILE2: usize = 61;
    pub const MISSILE3: usize = 62;
    pub const MISSILEFLASH1: usize = 63;
    pub const MISSILEFLASH2: usize = 64;
    pub const MISSILEFLASH3: usize = 65;
    pub const MISSILEFLASH4: usize = 66;
    pub const SAW: usize = 67;
    pub const SAWB: usize = 68;
    pub const SAWDOWN: usize = 69;
    pub const SAWUP: usize = 70;
    pub const SAW1: usize = 71;
    pub const SAW2: usize = 72;
    pub const SAW3: usize = 73;
    pub const PLASMA: usize = 74;
    pub const PLASMADOWN: usize = 75;
    pub const PLASMAUP: usize = 76;
    pub const PLASMA1: usize = 77;
    pub const PLASMA2: usize = 78;
    pub const PLASMAFLASH1: usize = 79;
    pub const PLASMAFLASH2: usize = 80;
    pub const BFG: usize = 81;
    pub const BFGDOWN: usize = 82;
    pub const BFGUP: usize = 83;
    pub const BFG1: usize = 84;
    pub const BFG2: usize = 85;
    pub const BFG3: usize = 86;
    pub const BFG4: usize = 87;
    pub const BFGFLASH1: usize = 88;
    pub const BFGFLASH2: usize = 89;
    pub const BLOOD1: usize = 90;
    pub const BLOOD2: usize = 91;
    pub const BLOOD3: usize = 92;
    pub const PUFF1: usize = 93;
    pub const PUFF2: usize = 94;
    pub const PUFF3: usize = 95;
    pub const PUFF4: usize = 96;
    pub const TBALL1: usize = 97;
    pub const TBALL2: usize = 98;
    pub const TBALLX1: usize = 99;
    pub const TBALLX2: usize = 100;
    pub const TBALLX3: usize = 101;
    pub const RBALL1: usize = 102;
    pub const RBALL2: usize = 103;
    pub const RBALLX1: usize = 104;
    pub const RBALLX2: usize = 105;
    pub const RBALLX3: usize = 106;
    pub const BRBALL1: usize = 107;
    pub const BRBALL2: usize = 108;
    pub const BRBALLX1: usize = 109;
    pub const BRBALLX2: usize = 110;
    pub const BRBALLX3: usize = 111;
    pub const PLASBALL: usize = 112;
    pub const PLASBALL2: usize = 113;
    pub const PLASEXP1: usize = 114;
    pub const ROCKET: usize = 119;
    pub const BFGSHOT: usize = 120;
    pub const BFGSHOT2: usize = 121;
    pub const BFGLAND1: usize = 122;
    pub const BFGLAND2: usize = 123;
    pub const BFGLAND3: usize = 124;
    pub const BFGLAND4: usize = 125;
    pub const BFGLAND5: usize = 126;
    pub const BFGLAND6: usize = 127;
    pub const BFGEXP1: usize = 128;
    pub const EXPLODE1: usize = 132;
    pub const EXPLODE2: usize = 133;
    pub const EXPLODE3: usize = 134;
    pub const TFOG: usize = 135;
    pub const IFOG: usize = 147;
    pub const PLAY: usize = 154;
    pub const PLAY_RUN1: usize = 155;
    pub const PLAY_ATK1: usize = 159;
    pub const PLAY_ATK2: usize = 160;
    pub const PLAY_PAIN: usize = 161;
    pub const PLAY_PAIN2: usize = 162;
    pub const PLAY_DIE1: usize = 163;
    pub const PLAY_XDIE1: usize = 170;
    pub const POSS_STND: usize = 179;
    pub const POSS_STND2: usize = 180;
    pub const POSS_RUN1: usize = 181;
    pub const POSS_ATK1: usize = 189;
    pub const POSS_ATK2: usize = 190;
    pub const POSS_ATK3: usize = 191;
    pub const POSS_PAIN: usize = 192;
    pub const POSS_PAIN2: usize = 193;
    pub const POSS_DIE1: usize = 194;
    pub const POSS_XDIE1: usize = 199;
    pub const POSS_RAISE1: usize = 208;
    pub const SPOS_STND: usize = 212;
    pub const SPOS_STND2: usize = 213;
    pub const SPOS_RUN1: usize = 214;
    pub const SPOS_ATK1: usize = 222;
    pub const SPOS_ATK2: usize = 223;
    pub const SPOS_ATK3: usize = 224;
    pub const SPOS_PAIN: usize = 225;
    pub const SPOS_PAIN2: usize = 226;
    pub const SPOS_DIE1: usize = 227;
    pub const SPOS_XDIE1: usize = 232;
    pub const SPOS_RAISE1: usize = 241;
    pub const VILE_STND: usize = 246;
    pub const VILE_STND2: usize = 247;
    pub const VILE_RUN1: usize = 248;
    pub const VILE_ATK1: usize = 260;
    pub const VILE_HEAL1: usize = 271;
    pub const VILE_PAIN: usize = 274;
    pub const VILE_PAIN2: usize = 275;
    pub const VILE_DIE1: usize = 276;
    pub const FIRE1: usize = 286;
    pub const SKEL_STND: usize = 316;
    pub const SKEL_STND2: usize = 317;
    pub const SKEL_RUN1: usize = 318;
    pub const SKEL_FIST1: usize = 330;
    pub const SKEL_FIST2: usize = 331;
    pub const SKEL_FIST3: usize = 332;
    pub const SKEL_FIST4: usize = 333;
    pub const SKEL_MISS1: usize = 334;
    pub const SKEL_MISS2: usize = 335;
    pub const SKEL_MISS3: usize = 336;
    pub const SKEL_MISS4: usize = 337;
    pub const SKEL_PAIN: usize = 338;
    pub const SKEL_PAIN2: usize = 339;
    pub const SKEL_DIE1: usize = 340;
    pub const SKEL_RAISE1: usize = 346;
    pub const TRACER: usize = 352;
    pub const TRACER2: usize = 353;
    pub const TRACEEXP1: usize = 354;
    pub const TRACEEXP2: usize = 355;
    pub const TRACEEXP3: usize = 356;
    pub const SMOKE1: usize = 357;
    pub const FATT_STND: usize = 362;
    pub const FATT_STND2: usize = 363;
    pub const FATT_RUN1: usize = 364;
    pub const FATT_ATK1: usize = 376;
    pub const FATT_ATK2: usize = 377;
    pub const FATT_ATK3: usize = 378;
    pub const FATT_ATK4: usize = 379;
    pub const FATT_ATK5: usize = 380;
    pub const FATT_ATK6: usize = 381;
    pub const FATT_ATK7: usize = 382;
    pub const FATT_ATK8: usize = 383;
    pub const FATT_ATK9: usize = 384;
    pub const FATT_ATK10: usize = 385;
    pub const FATT_PAIN: usize = 386;
    pub const FATT_PAIN2: usize = 387;
    pub const FATT_DIE1: usize = 388;
    pub const FATT_RAISE1: usize = 398;
    pub const FATSHOT1: usize = 406;
    pub const FATSHOT2: usize = 407;
    pub const FATSHOTX1: usize = 408;
    pub const FATSHOTX2: usize = 409;
    pub const FATSHOTX3: usize = 410;
    pub const CPOS_STND: usize = 411;
    pub const CPOS_STND2: usize = 412;
    pub const CPOS_RUN1: usize = 413;
    pub const CPOS_ATK1: usize = 421;
    pub const CPOS_ATK2: usize = 422;
    pub const CPOS_ATK3: usize = 423;
    pub const CPOS_ATK4: usize = 424;
    pub const CPOS_PAIN: usize = 425;
    pub const CPOS_PAIN2: usize = 426;
    pub const CPOS_DIE1: usize = 427;
    pub const CPOS_XDIE1: usize = 434;
    pub const CPOS_RAISE1: usize = 440;
    pub const TROO_STND: usize = 447;
    pub const TROO_STND2: usize = 448;
    pub const TROO_RUN1: usize = 449;
    pub const TROO_ATK1: usize = 457;
    pub const TROO_ATK2: usize = 458;
    pub const TROO_ATK3: usize = 459;
    pub const TROO_PAIN: usize = 460;
    pub const TROO_PAIN2: usize = 461;
    pub const TROO_DIE1: usize = 462;
    pub const TROO_XDIE1: usize = 467;
    pub const TROO_RAISE1: usize = 475;
    pub const SARG_STND: usize = 480;
    pub const SARG_STND2: usize = 481;
    pub const SARG_RUN1: usize = 482;
    pub const SARG_ATK1: usize = 490;
    pub const SARG_ATK2: usize = 491;
    pub const SARG_ATK3: usize = 492;
    pub const SARG_PAIN: usize = 493;
    pub const SARG_PAIN2: usize = 494;
    pub const SARG_DIE1: usize = 495;
    pub const SARG_RAISE1: usize = 501;
    pub const HEAD_STND: usize = 507;
    pub const HEAD_RUN1: usize = 508;
    pub const HEAD_ATK1: usize = 509;
    pub const HEAD_ATK2: usize = 510;
    pub const HEAD_ATK3: usize = 511;
    pub const HEAD_PAIN: usize = 512;
    pub const HEAD_PAIN2: usize = 513;
    pub const HEAD_PAIN3: usize = 514;
    pub const HEAD_DIE1: usize = 515;
    pub const HEAD_RAISE1: usize = 521;
    pub const BOSS_STND: usize = 527;
    pub const BOSS_STND2: usize = 528;
    pub const BOSS_RUN1: usize = 529;
    pub const BOSS_ATK1: usize = 537;
    pub const BOSS_ATK2: usize = 538;
    pub const BOSS_ATK3: usize = 539;
    pub const BOSS_PAIN: usize = 540;
    pub const BOSS_PAIN2: usize = 541;
    pub const BOSS_DIE1: usize = 542;
    pub const BOSS_RAISE1: usize = 549;
    pub const BOS2_STND: usize = 556;
    pub const BOS2_STND2: usize = 557;
    pub const BOS2_RUN1: usize = 558;
    pub const BOS2_ATK1: usize = 566;
    pub const BOS2_ATK2: usize = 567;
    pub const BOS2_ATK3: usize = 568;
    pub const BOS2_PAIN: usize = 569;
    pub const BOS2_PAIN2: usize = 570;
    pub const BOS2_DIE1: usize = 571;
    pub const BOS2_RAISE1: usize = 578;
    pub const SKULL_STND: usize = 585;
    pub const SKULL_STND2: usize = 586;
    pub const SKULL_RUN1: usize = 587;
    pub const SKULL_RUN2: usize = 588;
    pub const SKULL_ATK1: usize = 589;
    pub const SKULL_ATK2: usize = 590;
    pub const SKULL_ATK3: usize = 591;
    pub const SKULL_ATK4: usize = 592;
    pub const SKULL_PAIN: usize = 593;
    pub const SKULL_PAIN2: usize = 594;
    pub const SKULL_DIE1: usize = 595;
    pub const SPID_STND: usize = 601;
    pub const SPID_STND2: usize = 602;
    pub const SPID_RUN1: usize = 603;
    pub const SPID_ATK1: usize = 615;
    pub const SPID_ATK2: usize = 616;
    pub const SPID_ATK3: usize = 617;
    pub const SPID_ATK4: usize = 618;
    pub const SPID_PAIN: usize = 619;
    pub const SPID_PAIN2: usize = 620;
    pub const SPID_DIE1: usize = 621;
    pub const BSPI_STND: usize = 632;
    pub const BSPI_STND2: usize = 633;
    pub const BSPI_SIGHT: usize = 634;
    pub const BSPI_RUN1: usize = 635;
    pub const BSPI_ATK1: usize = 647;
    pub const BSPI_ATK2: usize = 648;
    pub const BSPI_ATK3: usize = 649;
    pub const BSPI_ATK4: usize = 650;
    pub const BSPI_PAIN: usize = 651;
    pub const BSPI_PAIN2: usize = 652;
    pub const BSPI_DIE1: usize = 653;
    pub const BSPI_RAISE1: usize = 660;
    pub const ARACH_PLAZ: usize = 667;
    pub const ARACH_PLAZ2: usize = 668;
    pub const ARACH_PLEX1: usize = 669;
    pub const CYBER_STND: usize = 674;
    pub const CYBER_STND2: usize = 675;
    pub const CYBER_RUN1: usize = 676;
    pub const CYBER_ATK1: usize = 684;
    pub const CYBER_PAIN: usize = 690;
    pub const CYBER_DIE1: usize = 691;
    pub const PAIN_STND: usize = 701;
    pub const PAIN_RUN1: usize = 702;
    pub const PAIN_ATK1: usize = 708;
    pub const PAIN_ATK2: usize = 709;
    pub const PAIN_ATK3: usize = 710;
    pub const PAIN_ATK4: usize = 711;
    pub const PAIN_PAIN: usize = 712;
    pub const PAIN_PAIN2: usize = 713;
    pub const PAIN_DIE1: usize = 714;
    pub const PAIN_RAISE1: usize = 720;
    pub const SSWV_STND: usize = 726;
    pub const SSWV_STND2: usize = 727;
    pub const SSWV_RUN1: usize = 728;
    pub const SSWV_ATK1: usize = 736;
    pub const SSWV_ATK2: usize = 737;
    pub const SSWV_ATK3: usize = 738;
    pub const SSWV_ATK4: usize = 739;
    pub const SSWV_ATK5: usize = 740;
    pub const SSWV_ATK6: usize = 741;
    pub const SSWV_PAIN: usize = 742;
    pub const SSWV_PAIN2: usize = 743;
    pub const SSWV_DIE1: usize = 744;
    pub const SSWV_XDIE1: usize = 749;
    pub const SSWV_RAISE1: usize = 758;
    pub const KEENSTND: usize = 763;
    pub const COMMKEEN: usize = 764;
    pub const KEENPAIN: usize = 776;
    pub const KEENPAIN2: usize = 777;
    pub const BRAIN: usize = 778;
    pub const BRAIN_PAIN: usize = 779;
    pub const BRAIN_DIE1: usize = 780;
    pub const BRAIN_DIE2: usize = 781;
    pub const BRAIN_DIE3: usize = 782;
    pub const BRAIN_DIE4: usize = 783;
    pub const BRAINEYE: usize = 784;
    pub const BRAINEYESEE: usize = 785;
    pub const BRAINEYE1: usize = 786;
    pub const SPAWN1: usize = 787;
    pub const SPAWN2: usize = 788;
    pub const SPAWN3: usize = 789;
    pub const SPAWN4: usize = 790;
    pub const SPAWNFIRE1: usize = 791;
    pub const BRAINEXPLODE1: usize = 799;
    pub const BRAINEXPLODE2: usize = 800;
    pub const BRAINEXPLODE3: usize = 801;
    pub const ARM1: usize = 802;
    pub const ARM1A: usize = 803;
    pub const ARM2: usize = 804;
    pub const ARM2A: usize = 805;
    pub const BAR1: usize = 806;
    pub const BAR2: usize = 807;
    pub const BEXP: usize = 808;
    pub const BEXP2: usize = 809;
    pub const BEXP3: usize = 810;
    pub const BEXP4: usize = 811;
    pub const BEXP5: usize = 812;
    pub const BBAR1: usize = 813;
    pub const BON1: usize = 816;
    pub const BON2: usize = 822;
    pub const BKEY: usize = 828;
    pub const BKEY2: usize = 829;
    pub const RKEY: usize = 830;
    pub const RKEY2: usize = 831;
    pub const YKEY: usize = 832;
    pub const YKEY2: usize = 833;
    pub const BSKULL: usize = 834;
    pub const BSKULL2: usize = 835;
    pub const RSKULL: usize = 836;
    pub const RSKULL2: usize = 837;
    pub const YSKULL: usize = 838;
    pub const YSKULL2: usize = 839;
    pub const STIM: usize = 840;
    pub const MEDI: usize = 841;
    pub const SOUL: usize = 842;
    pub const PINV: usize = 848;
    pub const PSTR: usize = 852;
    pub const PINS: usize = 853;
    pub const MEGA: usize = 857;
    pub const SUIT: usize = 861;
    pub const PMAP: usize = 862;
    pub const PVIS: usize = 868;
    pub const PVIS2: usize = 869;
    pub const CLIP: usize = 870;
    pub const AMMO: usize = 871;
    pub const ROCK: usize = 872;
    pub const BROK: usize = 873;
    pub const CELL: usize = 874;
    pub const CELP: usize = 875;
    pub const SHEL: usize = 876;
    pub const SBOX: usize = 877;
    pub const BPAK: usize = 878;
    pub const BFUG: usize = 879;
    pub const MGUN: usize = 880;
    pub const CSAW: usize = 881;
    pub const LAUN: usize = 882;
    pub const PLAS: usize = 883;
    pub const SHOT: usize = 884;
    pub const SHOT2: usize = 885;
    pub const COLU: usize = 886;
    pub const STALAG: usize = 887;
    pub const BLOODYTWITCH1: usize = 888;
    pub const DEADTORSO: usize = 892;
    pub const DEADBOTTOM: usize = 893;
    pub const HEADSONSTICK: usize = 894;
    pub const GIBS: usize = 895;
    pub const HEADONASTICK: usize = 896;
    pub const HEADCANDLES1: usize = 897;
    pub const HEADCANDLES2: usize = 898;
    pub const DEADSTICK: usize = 899;
    pub const LIVESTICK1: usize = 900;
    pub const LIVESTICK2: usize = 901;
    pub const MEAT2: usize = 902;
    pub const MEAT3: usize = 903;
    pub const MEAT4: usize = 904;
    pub const MEAT5: usize = 905;
    pub const STALAGTITE: usize = 906;
    pub const TALLGRNCOL: usize = 907;
    pub const SHRTGRNCOL: usize = 908;
    pub const TALLREDCOL: usize = 909;
    pub const SHRTREDCOL: usize = 910;
    pub const CANDLESTIK: usize = 911;
    pub const CANDELABRA: usize = 912;
    pub const SKULLCOL: usize = 913;
    pub const TORCHTREE: usize = 914;
    pub const BIGTREE: usize = 915;
    pub const TECHPILLAR: usize = 916;
    pub const EVILEYE1: usize = 917;
    pub const FLOATSKULL1: usize = 921;
    pub const HEARTCOL1: usize = 924;
    pub const HEARTCOL2: usize = 925;
    pub const BLUETORCH1: usize = 926;
    pub const GREENTORCH1: usize = 930;
    pub const REDTORCH1: usize = 934;
    pub const BTORCHSHRT1: usize = 938;
    pub const GTORCHSHRT1: usize = 942;
    pub const RTORCHSHRT1: usize = 946;
    pub const HANGNOGUTS: usize = 950;
    pub const HANGBNOBRAIN: usize = 951;
    pub const HANGTLOOKDN: usize = 952;
    pub const HANGTSKULL: usize = 953;
    pub const HANGTLOOKUP: usize = 954;
    pub const HANGTNOBRAIN: usize = 955;
    pub const COLONGIBS: usize = 956;
    pub const SMALLPOOL: usize = 957;
    pub const BRAINSTEM: usize = 958;
    pub const TECHLAMP1: usize = 959;
    pub const TECH2LAMP1: usize = 963;
    pub const HEAD_DIE6: usize = 520;
    pub const PLAY_DIE7: usize = 169;
    pub const POSS_DIE5: usize = 198;
    pub const SARG_DIE6: usize = 500;
    pub const SKULL_DIE6: usize = 600;
    pub const TROO_DIE5: usize = 466;
    pub const SPOS_DIE5: usize = 231;
    pub const PLAY_XDIE9: usize = 178;
}

/// The four ammo table entries
pub(crate) const AMMO: [Ammo; 4] = [
    Ammo { kind: AmmoKind::Bullets, max: 200, pickup: 10 },
    Ammo { kind: AmmoKind::Shells, max: 50, pickup: 4 },
    Ammo { kind: AmmoKind::Cells, max: 300, pickup: 20 },
    Ammo { kind: AmmoKind::Rockets, max: 50, pickup: 1 },
];

/// The baseline miscellany record
pub(crate) const MISC: Miscellany = Miscellany {
    initial_health: 100,
    initial_bullets: 50,
    max_health: 200,
    max_armor: 200,
    green_armor_class: 1,
    blue_armor_class: 2,
    soulsphere_health: 100,
    max_soulsphere_health: 200,
    megasphere_health: 200,
    god_mode_health: 100,
    idfa_armor: 200,
    idfa_armor_class: 2,
    idkfa_armor: 200,
    idkfa_armor_class: 2,
    bfg_cells_per_shot: 40,
    monsters_infight: false,
};

/// Sound names in executable order; entry `i` names sound `i + 1`
pub(crate) const SOUND_NAMES: [&str; 108] = [
    "pistol", "shotgn", "sgcock", "dshtgn", "dbopn", "dbcls",
    "dbload", "plasma", "bfg", "sawup", "sawidl", "sawful",
    "sawhit", "rlaunc", "rxplod", "firsht", "firxpl", "pstart",
    "pstop", "doropn", "dorcls", "stnmov", "swtchn", "swtchx",
    "plpain", "dmpain", "popain", "vipain", "mnpain", "pepain",
    "slop", "itemup", "wpnup", "oof", "telept", "posit1",
    "posit2", "posit3", "bgsit1", "bgsit2", "sgtsit", "cacsit",
    "brssit", "cybsit", "spisit", "bspsit", "kntsit", "vilsit",
    "mansit", "pesit", "sklatk", "sgtatk", "skepch", "vilatk",
    "claw", "skeswg", "pldeth", "pdiehi", "podth1", "podth2",
    "podth3", "bgdth1", "bgdth2", "sgtdth", "cacdth", "skldth",
    "brsdth", "cybdth", "spidth", "bspdth", "vildth", "kntdth",
    "pedth", "skedth", "posact", "bgact", "dmact", "bspact",
    "bspwlk", "vilact", "noway", "barexp", "punch", "hoof",
    "metal", "chgun", "tink", "bdopn", "bdcls", "itmbk",
    "flame", "flamst", "getpow", "bospit", "boscub", "bossit",
    "bospn", "bosdth", "manatk", "mandth", "sssit", "ssdth",
    "keenpn", "keendt", "skeact", "skesit", "skeatk", "radio",
];

/// Sprite names in executable order
pub(crate) const SPRITE_NAMES: [&str; 138] = [
    "TROO", "SHTG", "PUNG", "PISG", "PISF", "SHTF", "SHT2", "CHGG",
    "CHGF", "MISG", "MISF", "SAWG", "PLSG", "PLSF", "BFGG", "BFGF",
    "BLUD", "PUFF", "BAL1", "BAL2", "PLSS", "PLSE", "MISL", "BFS1",
    "BFE1", "BFE2", "TFOG", "IFOG", "PLAY", "POSS", "SPOS", "VILE",
    "FIRE", "FATB", "FBXP", "SKEL", "MANF", "FATT", "CPOS", "SARG",
    "HEAD", "BAL7", "BOSS", "BOS2", "SKUL", "SPID", "BSPI", "APLS",
    "APBX", "CYBR", "PAIN", "SSWV", "KEEN", "BBRN", "BOSF", "ARM1",
    "ARM2", "BAR1", "BEXP", "FCAN", "BON1", "BON2", "BKEY", "RKEY",
    "YKEY", "BSKU", "RSKU", "YSKU", "STIM", "MEDI", "SOUL", "PINV",
    "PSTR", "PINS", "MEGA", "SUIT", "PMAP", "PVIS", "CLIP", "AMMO",
    "ROCK", "BROK", "CELL", "CELP", "SHEL", "SBOX", "BPAK", "BFUG",
    "MGUN", "CSAW", "LAUN", "PLAS", "SHOT", "SGN2", "COLU", "SMT2",
    "GOR1", "POL2", "POL5", "POL4", "POL3", "POL1", "POL6", "GOR2",
    "GOR3", "GOR4", "GOR5", "SMIT", "COL1", "COL2", "COL3", "COL4",
    "CAND", "CBRA", "COL6", "TRE1", "TRE2", "ELEC", "CEYE", "FSKU",
    "COL5", "TBLU", "TGRN", "TRED", "SMBT", "SMGT", "SMRT", "HDB1",
    "HDB2", "HDB3", "HDB4", "HDB5", "HDB6", "POB1", "POB2", "BRS1",
    "TLMP", "TLP2",
];

/// The sound table; index 0 is the reserved "no sound" entry
pub(crate) const SOUNDS: [Sound; 109] = [
    Sound { priority: 0, singular: false },
    Sound { priority: 64, singular: false }, // pistol
    Sound { priority: 64, singular: false }, // shotgn
    Sound { priority: 64, singular: false }, // sgcock
    Sound { priority: 64, singular: false }, // dshtgn
    Sound { priority: 64, singular: false }, // dbopn
    Sound { priority: 64, singular: false }, // dbcls
    Sound { priority: 64, singular: false }, // dbload
    Sound { priority: 64, singular: false }, // plasma
    Sound { priority: 64, singular: false }, // bfg
    Sound { priority: 64, singular: true }, // sawup
    Sound { priority: 118, singular: true }, // sawidl
    Sound { priority: 64, singular: true }, // sawful
    Sound { priority: 64, singular: true }, // sawhit
    Sound { priority: 64, singular: false }, // rlaunc
    Sound { priority: 70, singular: false }, // rxplod
    Sound { priority: 70, singular: false }, // firsht
    Sound { priority: 70, singular: false }, // firxpl
    Sound { priority: 100, singular: false }, // pstart
    Sound { priority: 100, singular: false }, // pstop
    Sound { priority: 100, singular: false }, // doropn
    Sound { priority: 100, singular: false }, // dorcls
    Sound { priority: 119, singular: true }, // stnmov
    Sound { priority: 78, singular: false }, // swtchn
    Sound { priority: 78, singular: false }, // swtchx
    Sound { priority: 96, singular: false }, // plpain
    Sound { priority: 96, singular: false }, // dmpain
    Sound { priority: 96, singular: false }, // popain
    Sound { priority: 96, singular: false }, // vipain
    Sound { priority: 96, singular: false }, // mnpain
    Sound { priority: 96, singular: false }, // pepain
    Sound { priority: 78, singular: false }, // slop
    Sound { priority: 78, singular: false }, // itemup
    Sound { priority: 78, singular: false }, // wpnup
    Sound { priority: 96, singular: false }, // oof
    Sound { priority: 32, singular: false }, // telept
    Sound { priority: 98, singular: false }, // posit1
    Sound { priority: 98, singular: false }, // posit2
    Sound { priority: 98, singular: false }, // posit3
    Sound { priority: 98, singular: false }, // bgsit1
    Sound { priority: 98, singular: false }, // bgsit2
    Sound { priority: 98, singular: false }, // sgtsit
    Sound { priority: 98, singular: false }, // cacsit
    Sound { priority: 94, singular: false }, // brssit
    Sound { priority: 92, singular: false }, // cybsit
    Sound { priority: 90, singular: false }, // spisit
    Sound { priority: 90, singular: false }, // bspsit
    Sound { priority: 90, singular: false }, // kntsit
    Sound { priority: 90, singular: false }, // vilsit
    Sound { priority: 90, singular: false }, // mansit
    Sound { priority: 90, singular: false }, // pesit
    Sound { priority: 70, singular: false }, // sklatk
    Sound { priority: 70, singular: false }, // sgtatk
    Sound { priority: 70, singular: false }, // skepch
    Sound { priority: 70, singular: false }, // vilatk
    Sound { priority: 70, singular: false }, // claw
    Sound { priority: 70, singular: false }, // skeswg
    Sound { priority: 32, singular: false }, // pldeth
    Sound { priority: 32, singular: false }, // pdiehi
    Sound { priority: 70, singular: false }, // podth1
    Sound { priority: 70, singular: false }, // podth2
    Sound { priority: 70, singular: false }, // podth3
    Sound { priority: 70, singular: false }, // bgdth1
    Sound { priority: 70, singular: false }, // bgdth2
    Sound { priority: 70, singular: false }, // sgtdth
    Sound { priority: 70, singular: false }, // cacdth
    Sound { priority: 70, singular: false }, // skldth
    Sound { priority: 32, singular: false }, // brsdth
    Sound { priority: 32, singular: false }, // cybdth
    Sound { priority: 32, singular: false }, // spidth
    Sound { priority: 32, singular: false }, // bspdth
    Sound { priority: 32, singular: false }, // vildth
    Sound { priority: 32, singular: false }, // kntdth
    Sound { priority: 32, singular: false }, // pedth
    Sound { priority: 32, singular: false }, // skedth
    Sound { priority: 120, singular: false }, // posact
    Sound { priority: 120, singular: false }, // bgact
    Sound { priority: 120, singular: false }, // dmact
    Sound { priority: 100, singular: false }, // bspact
    Sound { priority: 100, singular: false }, // bspwlk
    Sound { priority: 100, singular: false }, // vilact
    Sound { priority: 78, singular: false }, // noway
    Sound { priority: 60, singular: false }, // barexp
    Sound { priority: 64, singular: false }, // punch
    Sound { priority: 70, singular: false }, // hoof
    Sound { priority: 70, singular: false }, // metal
    Sound { priority: 64, singular: false }, // chgun
    Sound { priority: 60, singular: false }, // tink
    Sound { priority: 100, singular: false }, // bdopn
    Sound { priority: 100, singular: false }, // bdcls
    Sound { priority: 100, singular: false }, // itmbk
    Sound { priority: 32, singular: false }, // flame
    Sound { priority: 32, singular: false }, // flamst
    Sound { priority: 60, singular: false }, // getpow
    Sound { priority: 70, singular: false }, // bospit
    Sound { priority: 70, singular: false }, // boscub
    Sound { priority: 70, singular: false }, // bossit
    Sound { priority: 70, singular: false }, // bospn
    Sound { priority: 70, singular: false }, // bosdth
    Sound { priority: 70, singular: false }, // manatk
    Sound { priority: 70, singular: false }, // mandth
    Sound { priority: 70, singular: false }, // sssit
    Sound { priority: 70, singular: false }, // ssdth
    Sound { priority: 70, singular: false }, // keenpn
    Sound { priority: 70, singular: false }, // keendt
    Sound { priority: 70, singular: false }, // skeact
    Sound { priority: 70, singular: false }, // skesit
    Sound { priority: 70, singular: false }, // skeatk
    Sound { priority: 60, singular: false }, // radio
];

/// The nine weapon table entries
pub(crate) const WEAPONS: [Weapon; 9] = [
    Weapon {
        name: "Fist",
        ammo: None,
        up_state: state::PUNCHUP,
        down_state: state::PUNCHDOWN,
        ready_state: state::PUNCH,
        fire_state: state::PUNCH1,
        flash_state: state::NULL,
    },
    Weapon {
        name: "Pistol",
        ammo: Some(AmmoKind::Bullets),
        up_state: state::PISTOLUP,
        down_state: state::PISTOLDOWN,
        ready_state: state::PISTOL,
        fire_state: state::PISTOL1,
        flash_state: state::PISTOLFLASH,
    },
    Weapon {
        name: "Shotgun",
        ammo: Some(AmmoKind::Shells),
        up_state: state::SGUNUP,
        down_state: state::SGUNDOWN,
        ready_state: state::SGUN,
        fire_state: state::SGUN1,
        flash_state: state::SGUNFLASH1,
    },
    Weapon {
        name: "Chaingun",
        ammo: Some(AmmoKind::Bullets),
        up_state: state::CHAINUP,
        down_state: state::CHAINDOWN,
        ready_state: state::CHAIN,
        fire_state: state::CHAIN1,
        flash_state: state::CHAINFLASH1,
    },
    Weapon {
        name: "Rocket Launcher",
        ammo: Some(AmmoKind::Rockets),
        up_state: state::MISSILEUP,
        down_state: state::MISSILEDOWN,
        ready_state: state::MISSILE,
        fire_state: state::MISSILE1,
        flash_state: state::MISSILEFLASH1,
    },
    Weapon {
        name: "Plasma Rifle",
        ammo: Some(AmmoKind::Cells),
        up_state: state::PLASMAUP,
        down_state: state::PLASMADOWN,
        ready_state: state::PLASMA,
        fire_state: state::PLASMA1,
        flash_state: state::PLASMAFLASH1,
    },
    Weapon {
        name: "BFG9000",
        ammo: Some(AmmoKind::Cells),
        up_state: state::BFGUP,
        down_state: state::BFGDOWN,
        ready_state: state::BFG,
        fire_state: state::BFG1,
        flash_state: state::BFGFLASH1,
    },
    Weapon {
        name: "Chainsaw",
        ammo: None,
        up_state: state::SAWUP,
        down_state: state::SAWDOWN,
        ready_state: state::SAW,
        fire_state: state::SAW1,
        flash_state: state::NULL,
    },
    Weapon {
        name: "Super Shotgun",
        ammo: Some(AmmoKind::Shells),
        up_state: state::DSGUNUP,
        down_state: state::DSGUNDOWN,
        ready_state: state::DSGUN,
        fire_state: state::DSGUN1,
        flash_state: state::DSGUNFLASH1,
    },
];

/// The thing table: every actor template of the executable
pub(crate) const THINGS: [Thing; 137] = [
    // 0
    Thing {
        name: "Player",
        editor_number: -1,
        health: 100, speed: 0, radius: 16, height: 56, damage: 0,
        reaction_time: 0, pain_chance: 255, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::DROP_OFF).union(ThingFlags::PICKUP).union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::PLAY,
        see_state: state::PLAY_RUN1,
        pain_state: state::PLAY_PAIN,
        melee_state: state::NULL,
        missile_state: state::PLAY_ATK1,
        death_state: state::PLAY_DIE1,
        xdeath_state: state::PLAY_XDIE1,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: sound::PLPAIN,
        death_sound: sound::PLDETH,
        active_sound: 0,
    },
    // 1
    Thing {
        name: "Zombieman",
        editor_number: 3004,
        health: 20, speed: 8, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 200, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::POSS_STND,
        see_state: state::POSS_RUN1,
        pain_state: state::POSS_PAIN,
        melee_state: state::NULL,
        missile_state: state::POSS_ATK1,
        death_state: state::POSS_DIE1,
        xdeath_state: state::POSS_XDIE1,
        raise_state: state::POSS_RAISE1,
        see_sound: sound::POSIT1,
        attack_sound: sound::PISTOL,
        pain_sound: sound::POPAIN,
        death_sound: sound::PODTH1,
        active_sound: sound::POSACT,
    },
    // 2
    Thing {
        name: "Shotgun Guy",
        editor_number: 9,
        health: 30, speed: 8, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 170, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::SPOS_STND,
        see_state: state::SPOS_RUN1,
        pain_state: state::SPOS_PAIN,
        melee_state: state::NULL,
        missile_state: state::SPOS_ATK1,
        death_state: state::SPOS_DIE1,
        xdeath_state: state::SPOS_XDIE1,
        raise_state: state::SPOS_RAISE1,
        see_sound: sound::POSIT2,
        attack_sound: 0,
        pain_sound: sound::POPAIN,
        death_sound: sound::PODTH2,
        active_sound: sound::POSACT,
    },
    // 3
    Thing {
        name: "Archvile",
        editor_number: 64,
        health: 700, speed: 15, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 10, mass: 500,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::VILE_STND,
        see_state: state::VILE_RUN1,
        pain_state: state::VILE_PAIN,
        melee_state: state::NULL,
        missile_state: state::VILE_ATK1,
        death_state: state::VILE_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::VILSIT,
        attack_sound: sound::VILATK,
        pain_sound: sound::VIPAIN,
        death_sound: sound::VILDTH,
        active_sound: sound::VILACT,
    },
    // 4
    Thing {
        name: "Archvile Fire",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::FIRE1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 5
    Thing {
        name: "Revenant",
        editor_number: 66,
        health: 300, speed: 10, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 100, mass: 500,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::SKEL_STND,
        see_state: state::SKEL_RUN1,
        pain_state: state::SKEL_PAIN,
        melee_state: state::SKEL_FIST1,
        missile_state: state::SKEL_MISS1,
        death_state: state::SKEL_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::SKEL_RAISE1,
        see_sound: sound::SKESIT,
        attack_sound: 0,
        pain_sound: sound::POPAIN,
        death_sound: sound::SKEDTH,
        active_sound: sound::SKEACT,
    },
    // 6
    Thing {
        name: "Revenant Fireball",
        editor_number: -1,
        health: 1000, speed: 10, radius: 11, height: 8, damage: 10,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::TRACER,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::TRACEEXP1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::SKEATK,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::BAREXP,
        active_sound: 0,
    },
    // 7
    Thing {
        name: "Fireball Trail",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::SMOKE1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 8
    Thing {
        name: "Mancubus",
        editor_number: 67,
        health: 600, speed: 8, radius: 48, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 80, mass: 1000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::FATT_STND,
        see_state: state::FATT_RUN1,
        pain_state: state::FATT_PAIN,
        melee_state: state::NULL,
        missile_state: state::FATT_ATK1,
        death_state: state::FATT_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::FATT_RAISE1,
        see_sound: sound::MANSIT,
        attack_sound: 0,
        pain_sound: sound::MNPAIN,
        death_sound: sound::MANDTH,
        active_sound: sound::POSACT,
    },
    // 9
    Thing {
        name: "Mancubus Fireball",
        editor_number: -1,
        health: 1000, speed: 20, radius: 6, height: 8, damage: 8,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::FATSHOT1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::FATSHOTX1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::FIRSHT,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 10
    Thing {
        name: "Chaingun Guy",
        editor_number: 65,
        health: 70, speed: 8, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 170, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::CPOS_STND,
        see_state: state::CPOS_RUN1,
        pain_state: state::CPOS_PAIN,
        melee_state: state::NULL,
        missile_state: state::CPOS_ATK1,
        death_state: state::CPOS_DIE1,
        xdeath_state: state::CPOS_XDIE1,
        raise_state: state::CPOS_RAISE1,
        see_sound: sound::POSIT2,
        attack_sound: 0,
        pain_sound: sound::POPAIN,
        death_sound: sound::PODTH2,
        active_sound: sound::POSACT,
    },
    // 11
    Thing {
        name: "Imp",
        editor_number: 3001,
        health: 60, speed: 8, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 200, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::TROO_STND,
        see_state: state::TROO_RUN1,
        pain_state: state::TROO_PAIN,
        melee_state: state::TROO_ATK1,
        missile_state: state::TROO_ATK1,
        death_state: state::TROO_DIE1,
        xdeath_state: state::TROO_XDIE1,
        raise_state: state::TROO_RAISE1,
        see_sound: sound::BGSIT1,
        attack_sound: 0,
        pain_sound: sound::POPAIN,
        death_sound: sound::BGDTH1,
        active_sound: sound::BGACT,
    },
    // 12
    Thing {
        name: "Demon",
        editor_number: 3002,
        health: 150, speed: 10, radius: 30, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 180, mass: 400,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::SARG_STND,
        see_state: state::SARG_RUN1,
        pain_state: state::SARG_PAIN,
        melee_state: state::SARG_ATK1,
        missile_state: state::NULL,
        death_state: state::SARG_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::SARG_RAISE1,
        see_sound: sound::SGTSIT,
        attack_sound: sound::SGTATK,
        pain_sound: sound::DMPAIN,
        death_sound: sound::SGTDTH,
        active_sound: sound::DMACT,
    },
    // 13
    Thing {
        name: "Spectre",
        editor_number: 58,
        health: 150, speed: 10, radius: 30, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 180, mass: 400,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL).union(ThingFlags::SHADOW),
        spawn_state: state::SARG_STND,
        see_state: state::SARG_RUN1,
        pain_state: state::SARG_PAIN,
        melee_state: state::SARG_ATK1,
        missile_state: state::NULL,
        death_state: state::SARG_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::SARG_RAISE1,
        see_sound: sound::SGTSIT,
        attack_sound: sound::SGTATK,
        pain_sound: sound::DMPAIN,
        death_sound: sound::SGTDTH,
        active_sound: sound::DMACT,
    },
    // 14
    Thing {
        name: "Cacodemon",
        editor_number: 3005,
        health: 400, speed: 8, radius: 31, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 128, mass: 400,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL).union(ThingFlags::FLOAT).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HEAD_STND,
        see_state: state::HEAD_RUN1,
        pain_state: state::HEAD_PAIN,
        melee_state: state::NULL,
        missile_state: state::HEAD_ATK1,
        death_state: state::HEAD_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::HEAD_RAISE1,
        see_sound: sound::CACSIT,
        attack_sound: 0,
        pain_sound: sound::DMPAIN,
        death_sound: sound::CACDTH,
        active_sound: sound::DMACT,
    },
    // 15
    Thing {
        name: "Baron of Hell",
        editor_number: 3003,
        health: 1000, speed: 8, radius: 24, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 50, mass: 1000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::BOSS_STND,
        see_state: state::BOSS_RUN1,
        pain_state: state::BOSS_PAIN,
        melee_state: state::BOSS_ATK1,
        missile_state: state::BOSS_ATK1,
        death_state: state::BOSS_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::BOSS_RAISE1,
        see_sound: sound::BRSSIT,
        attack_sound: 0,
        pain_sound: sound::DMPAIN,
        death_sound: sound::BRSDTH,
        active_sound: sound::DMACT,
    },
    // 16
    Thing {
        name: "Baron Fireball",
        editor_number: -1,
        health: 1000, speed: 15, radius: 6, height: 8, damage: 8,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::BRBALL1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::BRBALLX1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::FIRSHT,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 17
    Thing {
        name: "Hell Knight",
        editor_number: 69,
        health: 500, speed: 8, radius: 24, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 50, mass: 1000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::BOS2_STND,
        see_state: state::BOS2_RUN1,
        pain_state: state::BOS2_PAIN,
        melee_state: state::BOS2_ATK1,
        missile_state: state::BOS2_ATK1,
        death_state: state::BOS2_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::BOS2_RAISE1,
        see_sound: sound::KNTSIT,
        attack_sound: 0,
        pain_sound: sound::DMPAIN,
        death_sound: sound::KNTDTH,
        active_sound: sound::DMACT,
    },
    // 18
    Thing {
        name: "Lost Soul",
        editor_number: 3006,
        health: 100, speed: 8, radius: 16, height: 56, damage: 3,
        reaction_time: 8, pain_chance: 256, mass: 50,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::FLOAT).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::SKULL_STND,
        see_state: state::SKULL_RUN1,
        pain_state: state::SKULL_PAIN,
        melee_state: state::NULL,
        missile_state: state::SKULL_ATK1,
        death_state: state::SKULL_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: sound::SKLATK,
        pain_sound: sound::DMPAIN,
        death_sound: sound::FIRXPL,
        active_sound: sound::DMACT,
    },
    // 19
    Thing {
        name: "Spiderdemon",
        editor_number: 7,
        health: 3000, speed: 12, radius: 128, height: 100, damage: 0,
        reaction_time: 8, pain_chance: 40, mass: 1000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::SPID_STND,
        see_state: state::SPID_RUN1,
        pain_state: state::SPID_PAIN,
        melee_state: state::NULL,
        missile_state: state::SPID_ATK1,
        death_state: state::SPID_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::SPISIT,
        attack_sound: sound::SHOTGN,
        pain_sound: sound::DMPAIN,
        death_sound: sound::SPIDTH,
        active_sound: sound::DMACT,
    },
    // 20
    Thing {
        name: "Arachnotron",
        editor_number: 68,
        health: 500, speed: 12, radius: 64, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 128, mass: 600,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::BSPI_STND,
        see_state: state::BSPI_SIGHT,
        pain_state: state::BSPI_PAIN,
        melee_state: state::NULL,
        missile_state: state::BSPI_ATK1,
        death_state: state::BSPI_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::BSPI_RAISE1,
        see_sound: sound::BSPSIT,
        attack_sound: 0,
        pain_sound: sound::DMPAIN,
        death_sound: sound::BSPDTH,
        active_sound: sound::BSPACT,
    },
    // 21
    Thing {
        name: "Cyberdemon",
        editor_number: 16,
        health: 4000, speed: 16, radius: 40, height: 110, damage: 0,
        reaction_time: 8, pain_chance: 20, mass: 1000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::CYBER_STND,
        see_state: state::CYBER_RUN1,
        pain_state: state::CYBER_PAIN,
        melee_state: state::NULL,
        missile_state: state::CYBER_ATK1,
        death_state: state::CYBER_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::CYBSIT,
        attack_sound: 0,
        pain_sound: sound::DMPAIN,
        death_sound: sound::CYBDTH,
        active_sound: sound::DMACT,
    },
    // 22
    Thing {
        name: "Pain Elemental",
        editor_number: 71,
        health: 400, speed: 8, radius: 31, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 128, mass: 400,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL).union(ThingFlags::FLOAT).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::PAIN_STND,
        see_state: state::PAIN_RUN1,
        pain_state: state::PAIN_PAIN,
        melee_state: state::NULL,
        missile_state: state::PAIN_ATK1,
        death_state: state::PAIN_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::PAIN_RAISE1,
        see_sound: sound::PESIT,
        attack_sound: 0,
        pain_sound: sound::PEPAIN,
        death_sound: sound::PEDTH,
        active_sound: sound::DMACT,
    },
    // 23
    Thing {
        name: "Wolfenstein SS",
        editor_number: 84,
        health: 50, speed: 8, radius: 20, height: 56, damage: 0,
        reaction_time: 8, pain_chance: 170, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::SSWV_STND,
        see_state: state::SSWV_RUN1,
        pain_state: state::SSWV_PAIN,
        melee_state: state::NULL,
        missile_state: state::SSWV_ATK1,
        death_state: state::SSWV_DIE1,
        xdeath_state: state::SSWV_XDIE1,
        raise_state: state::SSWV_RAISE1,
        see_sound: sound::SSSIT,
        attack_sound: 0,
        pain_sound: sound::POPAIN,
        death_sound: sound::SSDTH,
        active_sound: sound::POSACT,
    },
    // 24
    Thing {
        name: "Commander Keen",
        editor_number: 72,
        health: 100, speed: 0, radius: 16, height: 72, damage: 0,
        reaction_time: 8, pain_chance: 256, mass: 10000000,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY).union(ThingFlags::SHOOTABLE).union(ThingFlags::COUNT_KILL),
        spawn_state: state::KEENSTND,
        see_state: state::NULL,
        pain_state: state::KEENPAIN,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::COMMKEEN,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: sound::KEENPN,
        death_sound: sound::KEENDT,
        active_sound: 0,
    },
    // 25
    Thing {
        name: "Boss Brain",
        editor_number: 88,
        health: 250, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 255, mass: 10000000,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE),
        spawn_state: state::BRAIN,
        see_state: state::NULL,
        pain_state: state::BRAIN_PAIN,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::BRAIN_DIE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: sound::BOSPN,
        death_sound: sound::BOSDTH,
        active_sound: 0,
    },
    // 26
    Thing {
        name: "Boss Eye",
        editor_number: 89,
        health: 1000, speed: 0, radius: 20, height: 32, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_SECTOR),
        spawn_state: state::BRAINEYE,
        see_state: state::BRAINEYESEE,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 27
    Thing {
        name: "Boss Target Spot",
        editor_number: 87,
        health: 1000, speed: 0, radius: 20, height: 32, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_SECTOR),
        spawn_state: state::NULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 28
    Thing {
        name: "Spawn Cube",
        editor_number: -1,
        health: 1000, speed: 10, radius: 6, height: 32, damage: 3,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY).union(ThingFlags::NO_CLIP),
        spawn_state: state::SPAWN1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::BOSPIT,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 29
    Thing {
        name: "Spawn Fire",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::SPAWNFIRE1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 30
    Thing {
        name: "Barrel",
        editor_number: 2035,
        health: 20, speed: 0, radius: 10, height: 42, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SHOOTABLE).union(ThingFlags::NO_BLOOD),
        spawn_state: state::BAR1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::BEXP,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::BAREXP,
        active_sound: 0,
    },
    // 31
    Thing {
        name: "Imp Fireball",
        editor_number: -1,
        health: 1000, speed: 10, radius: 6, height: 8, damage: 3,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::TBALL1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::TBALLX1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::FIRSHT,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 32
    Thing {
        name: "Cacodemon Fireball",
        editor_number: -1,
        health: 1000, speed: 10, radius: 6, height: 8, damage: 5,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::RBALL1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::RBALLX1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::FIRSHT,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 33
    Thing {
        name: "Rocket (in flight)",
        editor_number: -1,
        health: 1000, speed: 20, radius: 11, height: 8, damage: 20,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::ROCKET,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::EXPLODE1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::RLAUNC,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::BAREXP,
        active_sound: 0,
    },
    // 34
    Thing {
        name: "Plasma Bolt",
        editor_number: -1,
        health: 1000, speed: 25, radius: 13, height: 8, damage: 5,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::PLASBALL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::PLASEXP1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::PLASMA,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 35
    Thing {
        name: "BFG Shot",
        editor_number: -1,
        health: 1000, speed: 25, radius: 13, height: 8, damage: 100,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::BFGSHOT,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::BFGLAND1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::RXPLOD,
        active_sound: 0,
    },
    // 36
    Thing {
        name: "Arachnotron Plasma",
        editor_number: -1,
        health: 1000, speed: 25, radius: 13, height: 8, damage: 5,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::MISSILE).union(ThingFlags::DROP_OFF).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::ARACH_PLAZ,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::ARACH_PLEX1,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: sound::PLASMA,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: sound::FIRXPL,
        active_sound: 0,
    },
    // 37
    Thing {
        name: "Bullet Puff",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::PUFF1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 38
    Thing {
        name: "Blood Splat",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP,
        spawn_state: state::BLOOD1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 39
    Thing {
        name: "Teleport Fog",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::TFOG,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 40
    Thing {
        name: "Item Respawn Fog",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::IFOG,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 41
    Thing {
        name: "Teleport Landing",
        editor_number: 14,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_SECTOR),
        spawn_state: state::NULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 42
    Thing {
        name: "BFG Secondary Hit",
        editor_number: -1,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::BFGEXP1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 43
    Thing {
        name: "Green Armor",
        editor_number: 2018,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::ARM1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 44
    Thing {
        name: "Blue Armor",
        editor_number: 2019,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::ARM2,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 45
    Thing {
        name: "Health Bonus",
        editor_number: 2014,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::BON1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 46
    Thing {
        name: "Armor Bonus",
        editor_number: 2015,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::BON2,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 47
    Thing {
        name: "Blue Keycard",
        editor_number: 5,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::BKEY,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 48
    Thing {
        name: "Red Keycard",
        editor_number: 13,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::RKEY,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 49
    Thing {
        name: "Yellow Keycard",
        editor_number: 6,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::YKEY,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 50
    Thing {
        name: "Yellow Skull Key",
        editor_number: 39,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::YSKULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 51
    Thing {
        name: "Red Skull Key",
        editor_number: 38,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::RSKULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 52
    Thing {
        name: "Blue Skull Key",
        editor_number: 40,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::NOT_DEATHMATCH),
        spawn_state: state::BSKULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 53
    Thing {
        name: "Stimpack",
        editor_number: 2011,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::STIM,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 54
    Thing {
        name: "Medikit",
        editor_number: 2012,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::MEDI,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 55
    Thing {
        name: "Soul Sphere",
        editor_number: 2013,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::SOUL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 56
    Thing {
        name: "Invulnerability Sphere",
        editor_number: 2022,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::PINV,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 57
    Thing {
        name: "Berserk Pack",
        editor_number: 2023,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::PSTR,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 58
    Thing {
        name: "Blur Sphere",
        editor_number: 2024,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::PINS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 59
    Thing {
        name: "Radiation Suit",
        editor_number: 2025,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::SUIT,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 60
    Thing {
        name: "Computer Area Map",
        editor_number: 2026,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::PMAP,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 61
    Thing {
        name: "Light Amplification Goggles",
        editor_number: 2045,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::PVIS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 62
    Thing {
        name: "Mega Sphere",
        editor_number: 83,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL.union(ThingFlags::COUNT_ITEM),
        spawn_state: state::MEGA,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 63
    Thing {
        name: "Ammo Clip",
        editor_number: 2007,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::CLIP,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 64
    Thing {
        name: "Box of Bullets",
        editor_number: 2048,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::AMMO,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 65
    Thing {
        name: "Rocket",
        editor_number: 2010,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::ROCK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 66
    Thing {
        name: "Box of Rockets",
        editor_number: 2046,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::BROK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 67
    Thing {
        name: "Energy Cell",
        editor_number: 2047,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::CELL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 68
    Thing {
        name: "Energy Cell Pack",
        editor_number: 17,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::CELP,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 69
    Thing {
        name: "Shotgun Shells",
        editor_number: 2008,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::SHEL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 70
    Thing {
        name: "Box of Shells",
        editor_number: 2049,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::SBOX,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 71
    Thing {
        name: "Backpack",
        editor_number: 8,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::BPAK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 72
    Thing {
        name: "BFG9000 Pickup",
        editor_number: 2006,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::BFUG,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 73
    Thing {
        name: "Chaingun Pickup",
        editor_number: 2002,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::MGUN,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 74
    Thing {
        name: "Chainsaw Pickup",
        editor_number: 2005,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::CSAW,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 75
    Thing {
        name: "Rocket Launcher Pickup",
        editor_number: 2003,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::LAUN,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 76
    Thing {
        name: "Plasma Rifle Pickup",
        editor_number: 2004,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::PLAS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 77
    Thing {
        name: "Shotgun Pickup",
        editor_number: 2001,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::SHOT,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 78
    Thing {
        name: "Super Shotgun Pickup",
        editor_number: 82,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPECIAL,
        spawn_state: state::SHOT2,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 79
    Thing {
        name: "Tall Techno Floor Lamp",
        editor_number: 85,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TECHLAMP1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 80
    Thing {
        name: "Short Techno Floor Lamp",
        editor_number: 86,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TECH2LAMP1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 81
    Thing {
        name: "Floor Lamp",
        editor_number: 2028,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::COLU,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 82
    Thing {
        name: "Tall Green Column",
        editor_number: 30,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TALLGRNCOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 83
    Thing {
        name: "Short Green Column",
        editor_number: 31,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::SHRTGRNCOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 84
    Thing {
        name: "Tall Red Column",
        editor_number: 32,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TALLREDCOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 85
    Thing {
        name: "Short Red Column",
        editor_number: 33,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::SHRTREDCOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 86
    Thing {
        name: "Skull on Column",
        editor_number: 37,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::SKULLCOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 87
    Thing {
        name: "Heart Column",
        editor_number: 36,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::HEARTCOL1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 88
    Thing {
        name: "Evil Eye",
        editor_number: 41,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::EVILEYE1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 89
    Thing {
        name: "Floating Skull Rock",
        editor_number: 42,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::FLOATSKULL1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 90
    Thing {
        name: "Gray Tree",
        editor_number: 43,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TORCHTREE,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 91
    Thing {
        name: "Tall Blue Torch",
        editor_number: 44,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::BLUETORCH1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 92
    Thing {
        name: "Tall Green Torch",
        editor_number: 45,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::GREENTORCH1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 93
    Thing {
        name: "Tall Red Torch",
        editor_number: 46,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::REDTORCH1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 94
    Thing {
        name: "Short Blue Torch",
        editor_number: 55,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::BTORCHSHRT1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 95
    Thing {
        name: "Short Green Torch",
        editor_number: 56,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::GTORCHSHRT1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 96
    Thing {
        name: "Short Red Torch",
        editor_number: 57,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::RTORCHSHRT1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 97
    Thing {
        name: "Stalagmite",
        editor_number: 47,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::STALAGTITE,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 98
    Thing {
        name: "Tall Techno Pillar",
        editor_number: 48,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::TECHPILLAR,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 99
    Thing {
        name: "Candle",
        editor_number: 34,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::CANDLESTIK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 100
    Thing {
        name: "Candelabra",
        editor_number: 35,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::CANDELABRA,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 101
    Thing {
        name: "Hanging Victim, Twitching (blocking)",
        editor_number: 49,
        health: 1000, speed: 0, radius: 16, height: 68, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::BLOODYTWITCH1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 102
    Thing {
        name: "Hanging Victim, Arms Out (blocking)",
        editor_number: 50,
        health: 1000, speed: 0, radius: 16, height: 84, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT2,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 103
    Thing {
        name: "Hanging Victim, One-Legged (blocking)",
        editor_number: 51,
        health: 1000, speed: 0, radius: 16, height: 84, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT3,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 104
    Thing {
        name: "Hanging Pair of Legs (blocking)",
        editor_number: 52,
        health: 1000, speed: 0, radius: 16, height: 68, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT4,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 105
    Thing {
        name: "Hanging Leg (blocking)",
        editor_number: 53,
        health: 1000, speed: 0, radius: 16, height: 52, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT5,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 106
    Thing {
        name: "Hanging Victim, Arms Out",
        editor_number: 59,
        health: 1000, speed: 0, radius: 20, height: 84, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPAWN_CEILING.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT2,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 107
    Thing {
        name: "Hanging Pair of Legs",
        editor_number: 60,
        health: 1000, speed: 0, radius: 20, height: 68, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPAWN_CEILING.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT4,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 108
    Thing {
        name: "Hanging Victim, One-Legged",
        editor_number: 61,
        health: 1000, speed: 0, radius: 20, height: 52, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPAWN_CEILING.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT3,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 109
    Thing {
        name: "Hanging Leg",
        editor_number: 62,
        health: 1000, speed: 0, radius: 20, height: 52, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPAWN_CEILING.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::MEAT5,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 110
    Thing {
        name: "Hanging Victim, Twitching",
        editor_number: 63,
        health: 1000, speed: 0, radius: 20, height: 68, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SPAWN_CEILING.union(ThingFlags::NO_GRAVITY),
        spawn_state: state::BLOODYTWITCH1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 111
    Thing {
        name: "Dead Cacodemon",
        editor_number: 22,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::HEAD_DIE6,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 112
    Thing {
        name: "Dead Player",
        editor_number: 15,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::PLAY_DIE7,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 113
    Thing {
        name: "Dead Former Human",
        editor_number: 18,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::POSS_DIE5,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 114
    Thing {
        name: "Dead Demon",
        editor_number: 21,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::SARG_DIE6,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 115
    Thing {
        name: "Dead Lost Soul",
        editor_number: 23,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::SKULL_DIE6,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 116
    Thing {
        name: "Dead Imp",
        editor_number: 20,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::TROO_DIE5,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 117
    Thing {
        name: "Dead Former Sergeant",
        editor_number: 19,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::SPOS_DIE5,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 118
    Thing {
        name: "Bloody Mess",
        editor_number: 10,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::PLAY_XDIE9,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 119
    Thing {
        name: "Bloody Mess 2",
        editor_number: 12,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::PLAY_XDIE9,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 120
    Thing {
        name: "Five Skulls Shish Kebab",
        editor_number: 28,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::HEADSONSTICK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 121
    Thing {
        name: "Pool of Blood and Flesh",
        editor_number: 24,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::empty(),
        spawn_state: state::GIBS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 122
    Thing {
        name: "Skull on a Pole",
        editor_number: 27,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::HEADONASTICK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 123
    Thing {
        name: "Pile of Skulls and Candles",
        editor_number: 29,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::HEADCANDLES1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 124
    Thing {
        name: "Impaled Human",
        editor_number: 25,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::DEADSTICK,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 125
    Thing {
        name: "Twitching Impaled Human",
        editor_number: 26,
        health: 1000, speed: 0, radius: 16, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::LIVESTICK1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 126
    Thing {
        name: "Large Brown Tree",
        editor_number: 54,
        health: 1000, speed: 0, radius: 32, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::BIGTREE,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 127
    Thing {
        name: "Burning Barrel",
        editor_number: 70,
        health: 1000, speed: 0, radius: 16, height: 32, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID,
        spawn_state: state::BBAR1,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 128
    Thing {
        name: "Hanging Victim, Guts Removed",
        editor_number: 73,
        health: 1000, speed: 0, radius: 16, height: 88, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGNOGUTS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 129
    Thing {
        name: "Hanging Victim, Guts and Brain Removed",
        editor_number: 74,
        health: 1000, speed: 0, radius: 16, height: 88, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGBNOBRAIN,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 130
    Thing {
        name: "Hanging Torso, Looking Down",
        editor_number: 75,
        health: 1000, speed: 0, radius: 16, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGTLOOKDN,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 131
    Thing {
        name: "Hanging Torso, Open Skull",
        editor_number: 76,
        health: 1000, speed: 0, radius: 16, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGTSKULL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 132
    Thing {
        name: "Hanging Torso, Looking Up",
        editor_number: 77,
        health: 1000, speed: 0, radius: 16, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGTLOOKUP,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 133
    Thing {
        name: "Hanging Torso, Brain Removed",
        editor_number: 78,
        health: 1000, speed: 0, radius: 16, height: 64, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::SOLID.union(ThingFlags::SPAWN_CEILING).union(ThingFlags::NO_GRAVITY),
        spawn_state: state::HANGTNOBRAIN,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 134
    Thing {
        name: "Colon Gibs",
        editor_number: 79,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP,
        spawn_state: state::COLONGIBS,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 135
    Thing {
        name: "Small Pool of Blood",
        editor_number: 80,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP,
        spawn_state: state::SMALLPOOL,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
    // 136
    Thing {
        name: "Brain Stem",
        editor_number: 81,
        health: 1000, speed: 0, radius: 20, height: 16, damage: 0,
        reaction_time: 8, pain_chance: 0, mass: 100,
        flags: ThingFlags::NO_BLOCKMAP,
        spawn_state: state::BRAINSTEM,
        see_state: state::NULL,
        pain_state: state::NULL,
        melee_state: state::NULL,
        missile_state: state::NULL,
        death_state: state::NULL,
        xdeath_state: state::NULL,
        raise_state: state::NULL,
        see_sound: 0,
        attack_sound: 0,
        pain_sound: 0,
        death_sound: 0,
        active_sound: 0,
    },
];

const fn st(
    sprite_index: usize,
    frame: u32,
    bright: bool,
    tics: i32,
    action: Option<ActionPointer>,
    next_state_index: usize,
) -> State {
    State { sprite_index, frame, bright, tics, next_state_index, action }
}

/// The full animation state table, in executable order
pub(crate) const STATES: [State; 967] = [
    st(sprite::TROO, 0, false, -1, None, state::NULL), // 0 NULL
    st(sprite::SHTG, 4, false, 0, Some(Light0), state::NULL), // 1 LIGHTDONE
    st(sprite::PUNG, 0, false, 1, Some(WeaponReady), state::PUNCH), // 2 PUNCH
    st(sprite::PUNG, 0, false, 1, Some(Lower), state::PUNCHDOWN), // 3 PUNCHDOWN
    st(sprite::PUNG, 0, false, 1, Some(Raise), state::PUNCHUP), // 4 PUNCHUP
    st(sprite::PUNG, 1, false, 4, None, 6), // 5 PUNCH1
    st(sprite::PUNG, 2, false, 4, Some(Punch), 7), // 6 PUNCH2
    st(sprite::PUNG, 3, false, 5, None, 8), // 7 PUNCH3
    st(sprite::PUNG, 2, false, 4, None, 9), // 8 PUNCH4
    st(sprite::PUNG, 1, false, 5, Some(ReFire), state::PUNCH), // 9 PUNCH5
    st(sprite::PISG, 0, false, 1, Some(WeaponReady), state::PISTOL), // 10 PISTOL
    st(sprite::PISG, 0, false, 1, Some(Lower), state::PISTOLDOWN), // 11 PISTOLDOWN
    st(sprite::PISG, 0, false, 1, Some(Raise), state::PISTOLUP), // 12 PISTOLUP
    st(sprite::PISG, 0, false, 4, None, 14), // 13 PISTOL1
    st(sprite::PISG, 1, false, 6, Some(FirePistol), 15), // 14 PISTOL2
    st(sprite::PISG, 2, false, 4, None, 16), // 15 PISTOL3
    st(sprite::PISG, 1, false, 5, Some(ReFire), state::PISTOL), // 16 PISTOL4
    st(sprite::PISF, 0, true, 7, Some(Light1), state::LIGHTDONE), // 17 PISTOLFLASH
    st(sprite::SHTG, 0, false, 1, Some(WeaponReady), state::SGUN), // 18 SGUN
    st(sprite::SHTG, 0, false, 1, Some(Lower), state::SGUNDOWN), // 19 SGUNDOWN
    st(sprite::SHTG, 0, false, 1, Some(Raise), state::SGUNUP), // 20 SGUNUP
    st(sprite::SHTG, 0, false, 3, None, 22), // 21 SGUN1
    st(sprite::SHTG, 0, false, 7, Some(FireShotgun), 23), // 22 SGUN2
    st(sprite::SHTG, 1, false, 5, None, 24), // 23 SGUN3
    st(sprite::SHTG, 2, false, 5, None, 25), // 24 SGUN4
    st(sprite::SHTG, 3, false, 4, None, 26), // 25 SGUN5
    st(sprite::SHTG, 2, false, 5, None, 27), // 26 SGUN6
    st(sprite::SHTG, 1, false, 5, None, 28), // 27 SGUN7
    st(sprite::SHTG, 0, false, 3, None, 29), // 28 SGUN8
    st(sprite::SHTG, 0, false, 7, Some(ReFire), state::SGUN), // 29 SGUN9
    st(sprite::SHTF, 0, true, 4, Some(Light1), 31), // 30 SGUNFLASH1
    st(sprite::SHTF, 1, true, 3, Some(Light2), state::LIGHTDONE), // 31 SGUNFLASH2
    st(sprite::SHT2, 0, false, 1, Some(WeaponReady), state::DSGUN), // 32 DSGUN
    st(sprite::SHT2, 0, false, 1, Some(Lower), state::DSGUNDOWN), // 33 DSGUNDOWN
    st(sprite::SHT2, 0, false, 1, Some(Raise), state::DSGUNUP), // 34 DSGUNUP
    st(sprite::SHT2, 0, false, 3, None, 36), // 35 DSGUN1
    st(sprite::SHT2, 0, false, 7, Some(FireShotgun2), 37), // 36 DSGUN2
    st(sprite::SHT2, 1, false, 7, None, 38), // 37 DSGUN3
    st(sprite::SHT2, 2, false, 7, Some(CheckReload), 39), // 38 DSGUN4
    st(sprite::SHT2, 3, false, 7, Some(OpenShotgun2), 40), // 39 DSGUN5
    st(sprite::SHT2, 4, false, 7, None, 41), // 40 DSGUN6
    st(sprite::SHT2, 5, false, 7, Some(LoadShotgun2), 42), // 41 DSGUN7
    st(sprite::SHT2, 6, false, 6, None, 43), // 42 DSGUN8
    st(sprite::SHT2, 7, false, 6, Some(CloseShotgun2), 44), // 43 DSGUN9
    st(sprite::SHT2, 0, false, 5, Some(ReFire), state::DSGUN), // 44 DSGUN10
    st(sprite::SHT2, 1, false, 7, None, 46), // 45 DSNR1
    st(sprite::SHT2, 0, false, 3, None, state::DSGUNDOWN), // 46 DSNR2
    st(sprite::SHT2, 8, true, 5, Some(Light1), 48), // 47 DSGUNFLASH1
    st(sprite::SHT2, 9, true, 4, Some(Light2), state::LIGHTDONE), // 48 DSGUNFLASH2
    st(sprite::CHGG, 0, false, 1, Some(WeaponReady), state::CHAIN), // 49 CHAIN
    st(sprite::CHGG, 0, false, 1, Some(Lower), state::CHAINDOWN), // 50 CHAINDOWN
    st(sprite::CHGG, 0, false, 1, Some(Raise), state::CHAINUP), // 51 CHAINUP
    st(sprite::CHGG, 0, false, 4, Some(FireCGun), 53), // 52 CHAIN1
    st(sprite::CHGG, 1, false, 4, Some(FireCGun), 54), // 53 CHAIN2
    st(sprite::CHGG, 1, false, 0, Some(ReFire), state::CHAIN), // 54 CHAIN3
    st(sprite::CHGF, 0, true, 5, Some(Light1), state::LIGHTDONE), // 55 CHAINFLASH1
    st(sprite::CHGF, 1, true, 5, Some(Light2), state::LIGHTDONE), // 56 CHAINFLASH2
    st(sprite::MISG, 0, false, 1, Some(WeaponReady), state::MISSILE), // 57 MISSILE
    st(sprite::MISG, 0, false, 1, Some(Lower), state::MISSILEDOWN), // 58 MISSILEDOWN
    st(sprite::MISG, 0, false, 1, Some(Raise), state::MISSILEUP), // 59 MISSILEUP
    st(sprite::MISG, 1, true, 8, Some(GunFlash), 61), // 60 MISSILE1
    st(sprite::MISG, 1, true, 12, Some(FireMissile), 62), // 61 MISSILE2
    st(sprite::MISG, 1, false, 0, Some(ReFire), state::MISSILE), // 62 MISSILE3
    st(sprite::MISF, 0, true, 3, Some(Light1), 64), // 63 MISSILEFLASH1
    st(sprite::MISF, 1, true, 4, None, 65), // 64 MISSILEFLASH2
    st(sprite::MISF, 2, true, 4, Some(Light2), 66), // 65 MISSILEFLASH3
    st(sprite::MISF, 3, true, 4, Some(Light2), state::LIGHTDONE), // 66 MISSILEFLASH4
    st(sprite::SAWG, 2, false, 4, Some(WeaponReady), state::SAWB), // 67 SAW
    st(sprite::SAWG, 3, false, 4, Some(WeaponReady), state::SAW), // 68 SAWB
    st(sprite::SAWG, 2, false, 1, Some(Lower), state::SAWDOWN), // 69 SAWDOWN
    st(sprite::SAWG, 2, false, 1, Some(Raise), state::SAWUP), // 70 SAWUP
    st(sprite::SAWG, 0, false, 4, Some(Saw), 72), // 71 SAW1
    st(sprite::SAWG, 1, false, 4, Some(Saw), 73), // 72 SAW2
    st(sprite::SAWG, 1, false, 0, Some(ReFire), state::SAW), // 73 SAW3
    st(sprite::PLSG, 0, false, 1, Some(WeaponReady), state::PLASMA), // 74 PLASMA
    st(sprite::PLSG, 0, false, 1, Some(Lower), state::PLASMADOWN), // 75 PLASMADOWN
    st(sprite::PLSG, 0, false, 1, Some(Raise), state::PLASMAUP), // 76 PLASMAUP
    st(sprite::PLSG, 0, false, 3, Some(FirePlasma), 78), // 77 PLASMA1
    st(sprite::PLSG, 1, false, 20, Some(ReFire), state::PLASMA), // 78 PLASMA2
    st(sprite::PLSF, 0, true, 4, Some(Light1), state::LIGHTDONE), // 79 PLASMAFLASH1
    st(sprite::PLSF, 1, true, 4, Some(Light1), state::LIGHTDONE), // 80 PLASMAFLASH2
    st(sprite::BFGG, 0, false, 1, Some(WeaponReady), state::BFG), // 81 BFG
    st(sprite::BFGG, 0, false, 1, Some(Lower), state::BFGDOWN), // 82 BFGDOWN
    st(sprite::BFGG, 0, false, 1, Some(Raise), state::BFGUP), // 83 BFGUP
    st(sprite::BFGG, 0, false, 20, Some(BfgSound), 85), // 84 BFG1
    st(sprite::BFGG, 1, false, 10, Some(GunFlash), 86), // 85 BFG2
    st(sprite::BFGG, 1, false, 10, Some(FireBfg), 87), // 86 BFG3
    st(sprite::BFGG, 1, false, 20, Some(ReFire), state::BFG), // 87 BFG4
    st(sprite::BFGF, 0, true, 11, Some(Light1), 89), // 88 BFGFLASH1
    st(sprite::BFGF, 1, true, 6, Some(Light2), state::LIGHTDONE), // 89 BFGFLASH2
    st(sprite::BLUD, 2, false, 8, None, 91), // 90 BLOOD1
    st(sprite::BLUD, 1, false, 8, None, 92), // 91 BLOOD2
    st(sprite::BLUD, 0, false, 8, None, state::NULL), // 92 BLOOD3
    st(sprite::PUFF, 0, true, 4, None, 94), // 93 PUFF1
    st(sprite::PUFF, 1, false, 4, None, 95), // 94 PUFF2
    st(sprite::PUFF, 2, false, 4, None, 96), // 95 PUFF3
    st(sprite::PUFF, 3, false, 4, None, state::NULL), // 96 PUFF4
    st(sprite::BAL1, 0, true, 4, None, 98), // 97 TBALL1
    st(sprite::BAL1, 1, true, 4, None, state::TBALL1), // 98 TBALL2
    st(sprite::BAL1, 2, true, 6, None, 100), // 99 TBALLX1
    st(sprite::BAL1, 3, true, 6, None, 101), // 100 TBALLX2
    st(sprite::BAL1, 4, true, 6, None, state::NULL), // 101 TBALLX3
    st(sprite::BAL2, 0, true, 4, None, 103), // 102 RBALL1
    st(sprite::BAL2, 1, true, 4, None, state::RBALL1), // 103 RBALL2
    st(sprite::BAL2, 2, true, 6, None, 105), // 104 RBALLX1
    st(sprite::BAL2, 3, true, 6, None, 106), // 105 RBALLX2
    st(sprite::BAL2, 4, true, 6, None, state::NULL), // 106 RBALLX3
    st(sprite::BAL7, 0, true, 4, None, 108), // 107 BRBALL1
    st(sprite::BAL7, 1, true, 4, None, state::BRBALL1), // 108 BRBALL2
    st(sprite::BAL7, 2, true, 6, None, 110), // 109 BRBALLX1
    st(sprite::BAL7, 3, true, 6, None, 111), // 110 BRBALLX2
    st(sprite::BAL7, 4, true, 6, None, state::NULL), // 111 BRBALLX3
    st(sprite::PLSS, 0, true, 6, None, 113), // 112 PLASBALL
    st(sprite::PLSS, 1, true, 6, None, state::PLASBALL), // 113 PLASBALL2
    st(sprite::PLSE, 0, true, 4, None, 115), // 114 PLASEXP1
    st(sprite::PLSE, 1, true, 4, None, 116), // 115
    st(sprite::PLSE, 2, true, 4, None, 117), // 116
    st(sprite::PLSE, 3, true, 4, None, 118), // 117
    st(sprite::PLSE, 4, true, 4, None, state::NULL), // 118
    st(sprite::MISL, 0, true, 1, None, state::ROCKET), // 119 ROCKET
    st(sprite::BFS1, 0, true, 4, None, 121), // 120 BFGSHOT
    st(sprite::BFS1, 1, true, 4, None, state::BFGSHOT), // 121 BFGSHOT2
    st(sprite::BFE1, 0, true, 8, None, 123), // 122 BFGLAND1
    st(sprite::BFE1, 1, true, 8, None, 124), // 123 BFGLAND2
    st(sprite::BFE1, 2, true, 8, Some(BfgSpray), 125), // 124 BFGLAND3
    st(sprite::BFE1, 3, true, 8, None, 126), // 125 BFGLAND4
    st(sprite::BFE1, 4, true, 8, None, 127), // 126 BFGLAND5
    st(sprite::BFE1, 5, true, 8, None, state::NULL), // 127 BFGLAND6
    st(sprite::BFE2, 0, true, 8, None, 129), // 128 BFGEXP1
    st(sprite::BFE2, 1, true, 8, None, 130), // 129
    st(sprite::BFE2, 2, true, 8, None, 131), // 130
    st(sprite::BFE2, 3, true, 8, None, state::NULL), // 131
    st(sprite::MISL, 1, true, 8, Some(Explode), 133), // 132 EXPLODE1
    st(sprite::MISL, 2, true, 6, None, 134), // 133 EXPLODE2
    st(sprite::MISL, 3, true, 4, None, state::NULL), // 134 EXPLODE3
    st(sprite::TFOG, 0, true, 6, None, 136), // 135 TFOG
    st(sprite::TFOG, 1, true, 6, None, 137), // 136
    st(sprite::TFOG, 0, true, 6, None, 138), // 137
    st(sprite::TFOG, 1, true, 6, None, 139), // 138
    st(sprite::TFOG, 2, true, 6, None, 140), // 139
    st(sprite::TFOG, 3, true, 6, None, 141), // 140
    st(sprite::TFOG, 4, true, 6, None, 142), // 141
    st(sprite::TFOG, 5, true, 6, None, 143), // 142
    st(sprite::TFOG, 6, true, 6, None, 144), // 143
    st(sprite::TFOG, 7, true, 6, None, 145), // 144
    st(sprite::TFOG, 8, true, 6, None, 146), // 145
    st(sprite::TFOG, 9, true, 6, None, state::NULL), // 146
    st(sprite::IFOG, 0, true, 6, None, 148), // 147 IFOG
    st(sprite::IFOG, 1, true, 6, None, 149), // 148
    st(sprite::IFOG, 0, true, 6, None, 150), // 149
    st(sprite::IFOG, 1, true, 6, None, 151), // 150
    st(sprite::IFOG, 2, true, 6, None, 152), // 151
    st(sprite::IFOG, 3, true, 6, None, 153), // 152
    st(sprite::IFOG, 4, true, 6, None, state::NULL), // 153
    st(sprite::PLAY, 0, false, -1, None, state::NULL), // 154 PLAY
    st(sprite::PLAY, 0, false, 4, None, 156), // 155 PLAY_RUN1
    st(sprite::PLAY, 1, false, 4, None, 157), // 156
    st(sprite::PLAY, 2, false, 4, None, 158), // 157
    st(sprite::PLAY, 3, false, 4, None, state::PLAY_RUN1), // 158
    st(sprite::PLAY, 4, false, 12, None, state::PLAY), // 159 PLAY_ATK1
    st(sprite::PLAY, 5, true, 6, None, state::PLAY_ATK1), // 160 PLAY_ATK2
    st(sprite::PLAY, 6, false, 4, None, 162), // 161 PLAY_PAIN
    st(sprite::PLAY, 6, false, 4, Some(Pain), state::PLAY), // 162 PLAY_PAIN2
    st(sprite::PLAY, 7, false, 10, None, 164), // 163 PLAY_DIE1
    st(sprite::PLAY, 8, false, 10, Some(PlayerScream), 165), // 164
    st(sprite::PLAY, 9, false, 10, Some(Fall), 166), // 165
    st(sprite::PLAY, 10, false, 10, None, 167), // 166
    st(sprite::PLAY, 11, false, 10, None, 168), // 167
    st(sprite::PLAY, 12, false, 10, None, 169), // 168
    st(sprite::PLAY, 13, false, -1, None, state::NULL), // 169
    st(sprite::PLAY, 14, false, 5, None, 171), // 170 PLAY_XDIE1
    st(sprite::PLAY, 15, false, 5, Some(XScream), 172), // 171
    st(sprite::PLAY, 16, false, 5, Some(Fall), 173), // 172
    st(sprite::PLAY, 17, false, 5, None, 174), // 173
    st(sprite::PLAY, 18, false, 5, None, 175), // 174
    st(sprite::PLAY, 19, false, 5, None, 176), // 175
    st(sprite::PLAY, 20, false, 5, None, 177), // 176
    st(sprite::PLAY, 21, false, 5, None, 178), // 177
    st(sprite::PLAY, 22, false, -1, None, state::NULL), // 178
    st(sprite::POSS, 0, false, 10, Some(Look), state::POSS_STND2), // 179 POSS_STND
    st(sprite::POSS, 1, false, 10, Some(Look), state::POSS_STND), // 180 POSS_STND2
    st(sprite::POSS, 0, false, 4, Some(Chase), 182), // 181 POSS_RUN1
    st(sprite::POSS, 0, false, 4, Some(Chase), 183), // 182
    st(sprite::POSS, 1, false, 4, Some(Chase), 184), // 183
    st(sprite::POSS, 1, false, 4, Some(Chase), 185), // 184
    st(sprite::POSS, 2, false, 4, Some(Chase), 186), // 185
    st(sprite::POSS, 2, false, 4, Some(Chase), 187), // 186
    st(sprite::POSS, 3, false, 4, Some(Chase), 188), // 187
    st(sprite::POSS, 3, false, 4, Some(Chase), state::POSS_RUN1), // 188
    st(sprite::POSS, 4, false, 10, Some(FaceTarget), 190), // 189 POSS_ATK1
    st(sprite::POSS, 5, false, 8, Some(PosAttack), 191), // 190 POSS_ATK2
    st(sprite::POSS, 4, false, 8, None, state::POSS_RUN1), // 191 POSS_ATK3
    st(sprite::POSS, 6, false, 3, None, 193), // 192 POSS_PAIN
    st(sprite::POSS, 6, false, 3, Some(Pain), state::POSS_RUN1), // 193 POSS_PAIN2
    st(sprite::POSS, 7, false, 5, None, 195), // 194 POSS_DIE1
    st(sprite::POSS, 8, false, 5, Some(Scream), 196), // 195
    st(sprite::POSS, 9, false, 5, Some(Fall), 197), // 196
    st(sprite::POSS, 10, false, 5, None, 198), // 197
    st(sprite::POSS, 11, false, -1, None, state::NULL), // 198
    st(sprite::POSS, 12, false, 5, None, 200), // 199 POSS_XDIE1
    st(sprite::POSS, 13, false, 5, Some(XScream), 201), // 200
    st(sprite::POSS, 14, false, 5, Some(Fall), 202), // 201
    st(sprite::POSS, 15, false, 5, None, 203), // 202
    st(sprite::POSS, 16, false, 5, None, 204), // 203
    st(sprite::POSS, 17, false, 5, None, 205), // 204
    st(sprite::POSS, 18, false, 5, None, 206), // 205
    st(sprite::POSS, 19, false, 5, None, 207), // 206
    st(sprite::POSS, 20, false, -1, None, state::NULL), // 207
    st(sprite::POSS, 10, false, 5, None, 209), // 208 POSS_RAISE1
    st(sprite::POSS, 9, false, 5, None, 210), // 209
    st(sprite::POSS, 8, false, 5, None, 211), // 210
    st(sprite::POSS, 7, false, 5, None, state::POSS_RUN1), // 211
    st(sprite::SPOS, 0, false, 10, Some(Look), state::SPOS_STND2), // 212 SPOS_STND
    st(sprite::SPOS, 1, false, 10, Some(Look), state::SPOS_STND), // 213 SPOS_STND2
    st(sprite::SPOS, 0, false, 3, Some(Chase), 215), // 214 SPOS_RUN1
    st(sprite::SPOS, 0, false, 3, Some(Chase), 216), // 215
    st(sprite::SPOS, 1, false, 3, Some(Chase), 217), // 216
    st(sprite::SPOS, 1, false, 3, Some(Chase), 218), // 217
    st(sprite::SPOS, 2, false, 3, Some(Chase), 219), // 218
    st(sprite::SPOS, 2, false, 3, Some(Chase), 220), // 219
    st(sprite::SPOS, 3, false, 3, Some(Chase), 221), // 220
    st(sprite::SPOS, 3, false, 3, Some(Chase), state::SPOS_RUN1), // 221
    st(sprite::SPOS, 4, false, 10, Some(FaceTarget), 223), // 222 SPOS_ATK1
    st(sprite::SPOS, 5, true, 10, Some(SPosAttack), 224), // 223 SPOS_ATK2
    st(sprite::SPOS, 4, false, 10, None, state::SPOS_RUN1), // 224 SPOS_ATK3
    st(sprite::SPOS, 6, false, 3, None, 226), // 225 SPOS_PAIN
    st(sprite::SPOS, 6, false, 3, Some(Pain), state::SPOS_RUN1), // 226 SPOS_PAIN2
    st(sprite::SPOS, 7, false, 5, None, 228), // 227 SPOS_DIE1
    st(sprite::SPOS, 8, false, 5, Some(Scream), 229), // 228
    st(sprite::SPOS, 9, false, 5, Some(Fall), 230), // 229
    st(sprite::SPOS, 10, false, 5, None, 231), // 230
    st(sprite::SPOS, 11, false, -1, None, state::NULL), // 231
    st(sprite::SPOS, 12, false, 5, None, 233), // 232 SPOS_XDIE1
    st(sprite::SPOS, 13, false, 5, Some(XScream), 234), // 233
    st(sprite::SPOS, 14, false, 5, Some(Fall), 235), // 234
    st(sprite::SPOS, 15, false, 5, None, 236), // 235
    st(sprite::SPOS, 16, false, 5, None, 237), // 236
    st(sprite::SPOS, 17, false, 5, None, 238), // 237
    st(sprite::SPOS, 18, false, 5, None, 239), // 238
    st(sprite::SPOS, 19, false, 5, None, 240), // 239
    st(sprite::SPOS, 20, false, -1, None, state::NULL), // 240
    st(sprite::SPOS, 11, false, 5, None, 242), // 241 SPOS_RAISE1
    st(sprite::SPOS, 10, false, 5, None, 243), // 242
    st(sprite::SPOS, 9, false, 5, None, 244), // 243
    st(sprite::SPOS, 8, false, 5, None, 245), // 244
    st(sprite::SPOS, 7, false, 5, None, state::SPOS_RUN1), // 245
    st(sprite::VILE, 0, false, 10, Some(Look), state::VILE_STND2), // 246 VILE_STND
    st(sprite::VILE, 1, false, 10, Some(Look), state::VILE_STND), // 247 VILE_STND2
    st(sprite::VILE, 0, false, 2, Some(VileChase), 249), // 248 VILE_RUN1
    st(sprite::VILE, 0, false, 2, Some(VileChase), 250), // 249
    st(sprite::VILE, 1, false, 2, Some(VileChase), 251), // 250
    st(sprite::VILE, 1, false, 2, Some(VileChase), 252), // 251
    st(sprite::VILE, 2, false, 2, Some(VileChase), 253), // 252
    st(sprite::VILE, 2, false, 2, Some(VileChase), 254), // 253
    st(sprite::VILE, 3, false, 2, Some(VileChase), 255), // 254
    st(sprite::VILE, 3, false, 2, Some(VileChase), 256), // 255
    st(sprite::VILE, 4, false, 2, Some(VileChase), 257), // 256
    st(sprite::VILE, 4, false, 2, Some(VileChase), 258), // 257
    st(sprite::VILE, 5, false, 2, Some(VileChase), 259), // 258
    st(sprite::VILE, 5, false, 2, Some(VileChase), state::VILE_RUN1), // 259
    st(sprite::VILE, 6, true, 0, Some(VileStart), 261), // 260 VILE_ATK1
    st(sprite::VILE, 6, true, 10, Some(FaceTarget), 262), // 261
    st(sprite::VILE, 7, true, 8, Some(VileTarget), 263), // 262
    st(sprite::VILE, 8, true, 8, Some(FaceTarget), 264), // 263
    st(sprite::VILE, 9, true, 8, Some(FaceTarget), 265), // 264
    st(sprite::VILE, 10, true, 8, Some(FaceTarget), 266), // 265
    st(sprite::VILE, 11, true, 8, Some(FaceTarget), 267), // 266
    st(sprite::VILE, 12, true, 8, Some(FaceTarget), 268), // 267
    st(sprite::VILE, 13, true, 8, Some(FaceTarget), 269), // 268
    st(sprite::VILE, 14, true, 10, Some(VileAttack), 270), // 269
    st(sprite::VILE, 15, true, 20, None, state::VILE_RUN1), // 270
    st(sprite::VILE, 26, true, 10, None, 272), // 271 VILE_HEAL1
    st(sprite::VILE, 27, true, 10, None, 273), // 272
    st(sprite::VILE, 28, true, 10, None, state::VILE_RUN1), // 273
    st(sprite::VILE, 16, false, 5, None, 275), // 274 VILE_PAIN
    st(sprite::VILE, 16, false, 5, Some(Pain), state::VILE_RUN1), // 275 VILE_PAIN2
    st(sprite::VILE, 16, false, 7, None, 277), // 276 VILE_DIE1
    st(sprite::VILE, 17, false, 7, Some(Scream), 278), // 277
    st(sprite::VILE, 18, false, 7, Some(Fall), 279), // 278
    st(sprite::VILE, 19, false, 7, None, 280), // 279
    st(sprite::VILE, 20, false, 7, None, 281), // 280
    st(sprite::VILE, 21, false, 7, None, 282), // 281
    st(sprite::VILE, 22, false, 7, None, 283), // 282
    st(sprite::VILE, 23, false, 5, None, 284), // 283
    st(sprite::VILE, 24, false, 5, None, 285), // 284
    st(sprite::VILE, 25, false, -1, None, state::NULL), // 285
    st(sprite::FIRE, 0, true, 2, Some(StartFire), 287), // 286 FIRE1
    st(sprite::FIRE, 1, true, 2, Some(Fire), 288), // 287
    st(sprite::FIRE, 0, true, 2, Some(Fire), 289), // 288
    st(sprite::FIRE, 1, true, 2, Some(Fire), 290), // 289
    st(sprite::FIRE, 2, true, 2, Some(FireCrackle), 291), // 290
    st(sprite::FIRE, 1, true, 2, Some(Fire), 292), // 291
    st(sprite::FIRE, 2, true, 2, Some(Fire), 293), // 292
    st(sprite::FIRE, 1, true, 2, Some(Fire), 294), // 293
    st(sprite::FIRE, 2, true, 2, Some(Fire), 295), // 294
    st(sprite::FIRE, 3, true, 2, Some(Fire), 296), // 295
    st(sprite::FIRE, 2, true, 2, Some(Fire), 297), // 296
    st(sprite::FIRE, 3, true, 2, Some(Fire), 298), // 297
    st(sprite::FIRE, 2, true, 2, Some(Fire), 299), // 298
    st(sprite::FIRE, 3, true, 2, Some(Fire), 300), // 299
    st(sprite::FIRE, 4, true, 2, Some(Fire), 301), // 300
    st(sprite::FIRE, 3, true, 2, Some(Fire), 302), // 301
    st(sprite::FIRE, 4, true, 2, Some(Fire), 303), // 302
    st(sprite::FIRE, 3, true, 2, Some(Fire), 304), // 303
    st(sprite::FIRE, 4, true, 2, Some(Fire), 305), // 304
    st(sprite::FIRE, 5, true, 2, Some(Fire), 306), // 305
    st(sprite::FIRE, 4, true, 2, Some(Fire), 307), // 306
    st(sprite::FIRE, 5, true, 2, Some(Fire), 308), // 307
    st(sprite::FIRE, 4, true, 2, Some(Fire), 309), // 308
    st(sprite::FIRE, 5, true, 2, Some(Fire), 310), // 309
    st(sprite::FIRE, 6, true, 2, Some(Fire), 311), // 310
    st(sprite::FIRE, 7, true, 2, Some(Fire), 312), // 311
    st(sprite::FIRE, 6, true, 2, Some(Fire), 313), // 312
    st(sprite::FIRE, 7, true, 2, Some(Fire), 314), // 313
    st(sprite::FIRE, 6, true, 2, Some(Fire), 315), // 314
    st(sprite::FIRE, 7, true, 2, Some(Fire), state::NULL), // 315
    st(sprite::SKEL, 0, false, 10, Some(Look), state::SKEL_STND2), // 316 SKEL_STND
    st(sprite::SKEL, 1, false, 10, Some(Look), state::SKEL_STND), // 317 SKEL_STND2
    st(sprite::SKEL, 0, false, 2, Some(Chase), 319), // 318 SKEL_RUN1
    st(sprite::SKEL, 0, false, 2, Some(Chase), 320), // 319
    st(sprite::SKEL, 1, false, 2, Some(Chase), 321), // 320
    st(sprite::SKEL, 1, false, 2, Some(Chase), 322), // 321
    st(sprite::SKEL, 2, false, 2, Some(Chase), 323), // 322
    st(sprite::SKEL, 2, false, 2, Some(Chase), 324), // 323
    st(sprite::SKEL, 3, false, 2, Some(Chase), 325), // 324
    st(sprite::SKEL, 3, false, 2, Some(Chase), 326), // 325
    st(sprite::SKEL, 4, false, 2, Some(Chase), 327), // 326
    st(sprite::SKEL, 4, false, 2, Some(Chase), 328), // 327
    st(sprite::SKEL, 5, false, 2, Some(Chase), 329), // 328
    st(sprite::SKEL, 5, false, 2, Some(Chase), state::SKEL_RUN1), // 329
    st(sprite::SKEL, 6, false, 0, Some(FaceTarget), 331), // 330 SKEL_FIST1
    st(sprite::SKEL, 6, false, 6, Some(SkelWhoosh), 332), // 331 SKEL_FIST2
    st(sprite::SKEL, 7, false, 6, Some(FaceTarget), 333), // 332 SKEL_FIST3
    st(sprite::SKEL, 8, false, 6, Some(SkelFist), state::SKEL_RUN1), // 333 SKEL_FIST4
    st(sprite::SKEL, 9, true, 0, Some(FaceTarget), 335), // 334 SKEL_MISS1
    st(sprite::SKEL, 9, true, 10, Some(FaceTarget), 336), // 335 SKEL_MISS2
    st(sprite::SKEL, 10, false, 10, Some(SkelMissile), 337), // 336 SKEL_MISS3
    st(sprite::SKEL, 10, false, 10, Some(FaceTarget), state::SKEL_RUN1), // 337 SKEL_MISS4
    st(sprite::SKEL, 11, false, 5, None, 339), // 338 SKEL_PAIN
    st(sprite::SKEL, 11, false, 5, Some(Pain), state::SKEL_RUN1), // 339 SKEL_PAIN2
    st(sprite::SKEL, 11, false, 7, None, 341), // 340 SKEL_DIE1
    st(sprite::SKEL, 12, false, 7, None, 342), // 341
    st(sprite::SKEL, 13, false, 7, Some(Scream), 343), // 342
    st(sprite::SKEL, 14, false, 7, Some(Fall), 344), // 343
    st(sprite::SKEL, 15, false, 7, None, 345), // 344
    st(sprite::SKEL, 16, false, -1, None, state::NULL), // 345
    st(sprite::SKEL, 16, false, 5, None, 347), // 346 SKEL_RAISE1
    st(sprite::SKEL, 15, false, 5, None, 348), // 347
    st(sprite::SKEL, 14, false, 5, None, 349), // 348
    st(sprite::SKEL, 13, false, 5, None, 350), // 349
    st(sprite::SKEL, 12, false, 5, None, 351), // 350
    st(sprite::SKEL, 11, false, 5, None, state::SKEL_RUN1), // 351
    st(sprite::FATB, 0, true, 2, Some(Tracer), 353), // 352 TRACER
    st(sprite::FATB, 1, true, 2, Some(Tracer), state::TRACER), // 353 TRACER2
    st(sprite::FBXP, 0, true, 8, None, 355), // 354 TRACEEXP1
    st(sprite::FBXP, 1, true, 6, None, 356), // 355 TRACEEXP2
    st(sprite::FBXP, 2, true, 4, None, state::NULL), // 356 TRACEEXP3
    st(sprite::PUFF, 1, false, 4, None, 358), // 357 SMOKE1
    st(sprite::PUFF, 2, false, 4, None, 359), // 358
    st(sprite::PUFF, 1, false, 4, None, 360), // 359
    st(sprite::PUFF, 2, false, 4, None, 361), // 360
    st(sprite::PUFF, 3, false, 4, None, state::NULL), // 361
    st(sprite::FATT, 0, false, 15, Some(Look), state::FATT_STND2), // 362 FATT_STND
    st(sprite::FATT, 1, false, 15, Some(Look), state::FATT_STND), // 363 FATT_STND2
    st(sprite::FATT, 0, false, 4, Some(Chase), 365), // 364 FATT_RUN1
    st(sprite::FATT, 0, false, 4, Some(Chase), 366), // 365
    st(sprite::FATT, 1, false, 4, Some(Chase), 367), // 366
    st(sprite::FATT, 1, false, 4, Some(Chase), 368), // 367
    st(sprite::FATT, 2, false, 4, Some(Chase), 369), // 368
    st(sprite::FATT, 2, false, 4, Some(Chase), 370), // 369
    st(sprite::FATT, 3, false, 4, Some(Chase), 371), // 370
    st(sprite::FATT, 3, false, 4, Some(Chase), 372), // 371
    st(sprite::FATT, 4, false, 4, Some(Chase), 373), // 372
    st(sprite::FATT, 4, false, 4, Some(Chase), 374), // 373
    st(sprite::FATT, 5, false, 4, Some(Chase), 375), // 374
    st(sprite::FATT, 5, false, 4, Some(Chase), state::FATT_RUN1), // 375
    st(sprite::FATT, 6, false, 20, Some(FatRaise), 377), // 376 FATT_ATK1
    st(sprite::FATT, 7, true, 10, Some(FatAttack1), 378), // 377 FATT_ATK2
    st(sprite::FATT, 8, false, 5, Some(FaceTarget), 379), // 378 FATT_ATK3
    st(sprite::FATT, 6, false, 5, Some(FaceTarget), 380), // 379 FATT_ATK4
    st(sprite::FATT, 7, true, 10, Some(FatAttack2), 381), // 380 FATT_ATK5
    st(sprite::FATT, 8, false, 5, Some(FaceTarget), 382), // 381 FATT_ATK6
    st(sprite::FATT, 6, false, 5, Some(FaceTarget), 383), // 382 FATT_ATK7
    st(sprite::FATT, 7, true, 10, Some(FatAttack3), 384), // 383 FATT_ATK8
    st(sprite::FATT, 8, false, 5, Some(FaceTarget), 385), // 384 FATT_ATK9
    st(sprite::FATT, 6, false, 10, Some(FaceTarget), state::FATT_RUN1), // 385 FATT_ATK10
    st(sprite::FATT, 9, false, 3, None, 387), // 386 FATT_PAIN
    st(sprite::FATT, 9, false, 3, Some(Pain), state::FATT_RUN1), // 387 FATT_PAIN2
    st(sprite::FATT, 10, false, 6, None, 389), // 388 FATT_DIE1
    st(sprite::FATT, 11, false, 6, Some(Scream), 390), // 389
    st(sprite::FATT, 12, false, 6, Some(Fall), 391), // 390
    st(sprite::FATT, 13, false, 6, None, 392), // 391
    st(sprite::FATT, 14, false, 6, None, 393), // 392
    st(sprite::FATT, 15, false, 6, None, 394), // 393
    st(sprite::FATT, 16, false, 6, None, 395), // 394
    st(sprite::FATT, 17, false, 6, None, 396), // 395
    st(sprite::FATT, 18, false, 6, None, 397), // 396
    st(sprite::FATT, 19, false, -1, None, state::NULL), // 397
    st(sprite::FATT, 17, false, 5, None, 399), // 398 FATT_RAISE1
    st(sprite::FATT, 16, false, 5, None, 400), // 399
    st(sprite::FATT, 15, false, 5, None, 401), // 400
    st(sprite::FATT, 14, false, 5, None, 402), // 401
    st(sprite::FATT, 13, false, 5, None, 403), // 402
    st(sprite::FATT, 12, false, 5, None, 404), // 403
    st(sprite::FATT, 11, false, 5, None, 405), // 404
    st(sprite::FATT, 10, false, 5, None, state::FATT_RUN1), // 405
    st(sprite::MANF, 0, true, 4, None, 407), // 406 FATSHOT1
    st(sprite::MANF, 1, true, 4, None, state::FATSHOT1), // 407 FATSHOT2
    st(sprite::MISL, 1, true, 8, None, 409), // 408 FATSHOTX1
    st(sprite::MISL, 2, true, 6, None, 410), // 409 FATSHOTX2
    st(sprite::MISL, 3, true, 4, None, state::NULL), // 410 FATSHOTX3
    st(sprite::CPOS, 0, false, 10, Some(Look), state::CPOS_STND2), // 411 CPOS_STND
    st(sprite::CPOS, 1, false, 10, Some(Look), state::CPOS_STND), // 412 CPOS_STND2
    st(sprite::CPOS, 0, false, 3, Some(Chase), 414), // 413 CPOS_RUN1
    st(sprite::CPOS, 0, false, 3, Some(Chase), 415), // 414
    st(sprite::CPOS, 1, false, 3, Some(Chase), 416), // 415
    st(sprite::CPOS, 1, false, 3, Some(Chase), 417), // 416
    st(sprite::CPOS, 2, false, 3, Some(Chase), 418), // 417
    st(sprite::CPOS, 2, false, 3, Some(Chase), 419), // 418
    st(sprite::CPOS, 3, false, 3, Some(Chase), 420), // 419
    st(sprite::CPOS, 3, false, 3, Some(Chase), state::CPOS_RUN1), // 420
    st(sprite::CPOS, 4, false, 10, Some(FaceTarget), 422), // 421 CPOS_ATK1
    st(sprite::CPOS, 5, true, 4, Some(CPosAttack), 423), // 422 CPOS_ATK2
    st(sprite::CPOS, 4, true, 4, Some(CPosAttack), 424), // 423 CPOS_ATK3
    st(sprite::CPOS, 5, false, 1, Some(CPosRefire), state::CPOS_ATK2), // 424 CPOS_ATK4
    st(sprite::CPOS, 6, false, 3, None, 426), // 425 CPOS_PAIN
    st(sprite::CPOS, 6, false, 3, Some(Pain), state::CPOS_RUN1), // 426 CPOS_PAIN2
    st(sprite::CPOS, 7, false, 5, None, 428), // 427 CPOS_DIE1
    st(sprite::CPOS, 8, false, 5, Some(Scream), 429), // 428
    st(sprite::CPOS, 9, false, 5, Some(Fall), 430), // 429
    st(sprite::CPOS, 10, false, 5, None, 431), // 430
    st(sprite::CPOS, 11, false, 5, None, 432), // 431
    st(sprite::CPOS, 12, false, 5, None, 433), // 432
    st(sprite::CPOS, 13, false, -1, None, state::NULL), // 433
    st(sprite::CPOS, 14, false, 5, None, 435), // 434 CPOS_XDIE1
    st(sprite::CPOS, 15, false, 5, Some(XScream), 436), // 435
    st(sprite::CPOS, 16, false, 5, Some(Fall), 437), // 436
    st(sprite::CPOS, 17, false, 5, None, 438), // 437
    st(sprite::CPOS, 18, false, 5, None, 439), // 438
    st(sprite::CPOS, 19, false, -1, None, state::NULL), // 439
    st(sprite::CPOS, 13, false, 5, None, 441), // 440 CPOS_RAISE1
    st(sprite::CPOS, 12, false, 5, None, 442), // 441
    st(sprite::CPOS, 11, false, 5, None, 443), // 442
    st(sprite::CPOS, 10, false, 5, None, 444), // 443
    st(sprite::CPOS, 9, false, 5, None, 445), // 444
    st(sprite::CPOS, 8, false, 5, None, 446), // 445
    st(sprite::CPOS, 7, false, 5, None, state::CPOS_RUN1), // 446
    st(sprite::TROO, 0, false, 10, Some(Look), state::TROO_STND2), // 447 TROO_STND
    st(sprite::TROO, 1, false, 10, Some(Look), state::TROO_STND), // 448 TROO_STND2
    st(sprite::TROO, 0, false, 3, Some(Chase), 450), // 449 TROO_RUN1
    st(sprite::TROO, 0, false, 3, Some(Chase), 451), // 450
    st(sprite::TROO, 1, false, 3, Some(Chase), 452), // 451
    st(sprite::TROO, 1, false, 3, Some(Chase), 453), // 452
    st(sprite::TROO, 2, false, 3, Some(Chase), 454), // 453
    st(sprite::TROO, 2, false, 3, Some(Chase), 455), // 454
    st(sprite::TROO, 3, false, 3, Some(Chase), 456), // 455
    st(sprite::TROO, 3, false, 3, Some(Chase), state::TROO_RUN1), // 456
    st(sprite::TROO, 4, false, 8, Some(FaceTarget), 458), // 457 TROO_ATK1
    st(sprite::TROO, 5, false, 8, Some(FaceTarget), 459), // 458 TROO_ATK2
    st(sprite::TROO, 6, false, 6, Some(TroopAttack), state::TROO_RUN1), // 459 TROO_ATK3
    st(sprite::TROO, 7, false, 2, None, 461), // 460 TROO_PAIN
    st(sprite::TROO, 7, false, 2, Some(Pain), state::TROO_RUN1), // 461 TROO_PAIN2
    st(sprite::TROO, 8, false, 8, None, 463), // 462 TROO_DIE1
    st(sprite::TROO, 9, false, 8, Some(Scream), 464), // 463
    st(sprite::TROO, 10, false, 6, None, 465), // 464
    st(sprite::TROO, 11, false, 6, Some(Fall), 466), // 465
    st(sprite::TROO, 12, false, -1, None, state::NULL), // 466
    st(sprite::TROO, 13, false, 5, None, 468), // 467 TROO_XDIE1
    st(sprite::TROO, 14, false, 5, Some(XScream), 469), // 468
    st(sprite::TROO, 15, false, 5, Some(Fall), 470), // 469
    st(sprite::TROO, 16, false, 5, None, 471), // 470
    st(sprite::TROO, 17, false, 5, None, 472), // 471
    st(sprite::TROO, 18, false, 5, None, 473), // 472
    st(sprite::TROO, 19, false, 5, None, 474), // 473
    st(sprite::TROO, 20, false, -1, None, state::NULL), // 474
    st(sprite::TROO, 12, false, 8, None, 476), // 475 TROO_RAISE1
    st(sprite::TROO, 11, false, 8, None, 477), // 476
    st(sprite::TROO, 10, false, 8, None, 478), // 477
    st(sprite::TROO, 9, false, 8, None, 479), // 478
    st(sprite::TROO, 8, false, 8, None, state::TROO_RUN1), // 479
    st(sprite::SARG, 0, false, 10, Some(Look), state::SARG_STND2), // 480 SARG_STND
    st(sprite::SARG, 1, false, 10, Some(Look), state::SARG_STND), // 481 SARG_STND2
    st(sprite::SARG, 0, false, 2, Some(Chase), 483), // 482 SARG_RUN1
    st(sprite::SARG, 0, false, 2, Some(Chase), 484), // 483
    st(sprite::SARG, 1, false, 2, Some(Chase), 485), // 484
    st(sprite::SARG, 1, false, 2, Some(Chase), 486), // 485
    st(sprite::SARG, 2, false, 2, Some(Chase), 487), // 486
    st(sprite::SARG, 2, false, 2, Some(Chase), 488), // 487
    st(sprite::SARG, 3, false, 2, Some(Chase), 489), // 488
    st(sprite::SARG, 3, false, 2, Some(Chase), state::SARG_RUN1), // 489
    st(sprite::SARG, 4, false, 8, Some(FaceTarget), 491), // 490 SARG_ATK1
    st(sprite::SARG, 5, false, 8, Some(FaceTarget), 492), // 491 SARG_ATK2
    st(sprite::SARG, 6, false, 8, Some(SargAttack), state::SARG_RUN1), // 492 SARG_ATK3
    st(sprite::SARG, 7, false, 2, None, 494), // 493 SARG_PAIN
    st(sprite::SARG, 7, false, 2, Some(Pain), state::SARG_RUN1), // 494 SARG_PAIN2
    st(sprite::SARG, 8, false, 8, None, 496), // 495 SARG_DIE1
    st(sprite::SARG, 9, false, 8, Some(Scream), 497), // 496
    st(sprite::SARG, 10, false, 4, None, 498), // 497
    st(sprite::SARG, 11, false, 4, Some(Fall), 499), // 498
    st(sprite::SARG, 12, false, 4, None, 500), // 499
    st(sprite::SARG, 13, false, -1, None, state::NULL), // 500
    st(sprite::SARG, 13, false, 5, None, 502), // 501 SARG_RAISE1
    st(sprite::SARG, 12, false, 5, None, 503), // 502
    st(sprite::SARG, 11, false, 5, None, 504), // 503
    st(sprite::SARG, 10, false, 5, None, 505), // 504
    st(sprite::SARG, 9, false, 5, None, 506), // 505
    st(sprite::SARG, 8, false, 5, None, state::SARG_RUN1), // 506
    st(sprite::HEAD, 0, false, 10, Some(Look), state::HEAD_STND), // 507 HEAD_STND
    st(sprite::HEAD, 0, false, 3, Some(Chase), state::HEAD_RUN1), // 508 HEAD_RUN1
    st(sprite::HEAD, 1, false, 5, Some(FaceTarget), 510), // 509 HEAD_ATK1
    st(sprite::HEAD, 2, false, 5, Some(FaceTarget), 511), // 510 HEAD_ATK2
    st(sprite::HEAD, 3, true, 5, Some(HeadAttack), state::HEAD_RUN1), // 511 HEAD_ATK3
    st(sprite::HEAD, 4, false, 3, None, 513), // 512 HEAD_PAIN
    st(sprite::HEAD, 4, false, 3, Some(Pain), 514), // 513 HEAD_PAIN2
    st(sprite::HEAD, 5, false, 6, None, state::HEAD_RUN1), // 514 HEAD_PAIN3
    st(sprite::HEAD, 6, false, 8, None, 516), // 515 HEAD_DIE1
    st(sprite::HEAD, 7, false, 8, Some(Scream), 517), // 516
    st(sprite::HEAD, 8, false, 8, None, 518), // 517
    st(sprite::HEAD, 9, false, 8, None, 519), // 518
    st(sprite::HEAD, 10, false, 8, Some(Fall), 520), // 519
    st(sprite::HEAD, 11, false, -1, None, state::NULL), // 520
    st(sprite::HEAD, 11, false, 8, None, 522), // 521 HEAD_RAISE1
    st(sprite::HEAD, 10, false, 8, None, 523), // 522
    st(sprite::HEAD, 9, false, 8, None, 524), // 523
    st(sprite::HEAD, 8, false, 8, None, 525), // 524
    st(sprite::HEAD, 7, false, 8, None, 526), // 525
    st(sprite::HEAD, 6, false, 8, None, state::HEAD_RUN1), // 526
    st(sprite::BOSS, 0, false, 10, Some(Look), state::BOSS_STND2), // 527 BOSS_STND
    st(sprite::BOSS, 1, false, 10, Some(Look), state::BOSS_STND), // 528 BOSS_STND2
    st(sprite::BOSS, 0, false, 3, Some(Chase), 530), // 529 BOSS_RUN1
    st(sprite::BOSS, 0, false, 3, Some(Chase), 531), // 530
    st(sprite::BOSS, 1, false, 3, Some(Chase), 532), // 531
    st(sprite::BOSS, 1, false, 3, Some(Chase), 533), // 532
    st(sprite::BOSS, 2, false, 3, Some(Chase), 534), // 533
    st(sprite::BOSS, 2, false, 3, Some(Chase), 535), // 534
    st(sprite::BOSS, 3, false, 3, Some(Chase), 536), // 535
    st(sprite::BOSS, 3, false, 3, Some(Chase), state::BOSS_RUN1), // 536
    st(sprite::BOSS, 4, false, 8, Some(FaceTarget), 538), // 537 BOSS_ATK1
    st(sprite::BOSS, 5, false, 8, Some(FaceTarget), 539), // 538 BOSS_ATK2
    st(sprite::BOSS, 6, false, 8, Some(BruisAttack), state::BOSS_RUN1), // 539 BOSS_ATK3
    st(sprite::BOSS, 7, false, 2, None, 541), // 540 BOSS_PAIN
    st(sprite::BOSS, 7, false, 2, Some(Pain), state::BOSS_RUN1), // 541 BOSS_PAIN2
    st(sprite::BOSS, 8, false, 8, None, 543), // 542 BOSS_DIE1
    st(sprite::BOSS, 9, false, 8, Some(Scream), 544), // 543
    st(sprite::BOSS, 10, false, 8, None, 545), // 544
    st(sprite::BOSS, 11, false, 8, Some(Fall), 546), // 545
    st(sprite::BOSS, 12, false, 8, None, 547), // 546
    st(sprite::BOSS, 13, false, 8, None, 548), // 547
    st(sprite::BOSS, 14, false, -1, Some(BossDeath), state::NULL), // 548
    st(sprite::BOSS, 14, false, 8, None, 550), // 549 BOSS_RAISE1
    st(sprite::BOSS, 13, false, 8, None, 551), // 550
    st(sprite::BOSS, 12, false, 8, None, 552), // 551
    st(sprite::BOSS, 11, false, 8, None, 553), // 552
    st(sprite::BOSS, 10, false, 8, None, 554), // 553
    st(sprite::BOSS, 9, false, 8, None, 555), // 554
    st(sprite::BOSS, 8, false, 8, None, state::BOSS_RUN1), // 555
    st(sprite::BOS2, 0, false, 10, Some(Look), state::BOS2_STND2), // 556 BOS2_STND
    st(sprite::BOS2, 1, false, 10, Some(Look), state::BOS2_STND), // 557 BOS2_STND2
    st(sprite::BOS2, 0, false, 3, Some(Chase), 559), // 558 BOS2_RUN1
    st(sprite::BOS2, 0, false, 3, Some(Chase), 560), // 559
    st(sprite::BOS2, 1, false, 3, Some(Chase), 561), // 560
    st(sprite::BOS2, 1, false, 3, Some(Chase), 562), // 561
    st(sprite::BOS2, 2, false, 3, Some(Chase), 563), // 562
    st(sprite::BOS2, 2, false, 3, Some(Chase), 564), // 563
    st(sprite::BOS2, 3, false, 3, Some(Chase), 565), // 564
    st(sprite::BOS2, 3, false, 3, Some(Chase), state::BOS2_RUN1), // 565
    st(sprite::BOS2, 4, false, 8, Some(FaceTarget), 567), // 566 BOS2_ATK1
    st(sprite::BOS2, 5, false, 8, Some(FaceTarget), 568), // 567 BOS2_ATK2
    st(sprite::BOS2, 6, false, 8, Some(BruisAttack), state::BOS2_RUN1), // 568 BOS2_ATK3
    st(sprite::BOS2, 7, false, 2, None, 570), // 569 BOS2_PAIN
    st(sprite::BOS2, 7, false, 2, Some(Pain), state::BOS2_RUN1), // 570 BOS2_PAIN2
    st(sprite::BOS2, 8, false, 8, None, 572), // 571 BOS2_DIE1
    st(sprite::BOS2, 9, false, 8, Some(Scream), 573), // 572
    st(sprite::BOS2, 10, false, 8, None, 574), // 573
    st(sprite::BOS2, 11, false, 8, Some(Fall), 575), // 574
    st(sprite::BOS2, 12, false, 8, None, 576), // 575
    st(sprite::BOS2, 13, false, 8, None, 577), // 576
    st(sprite::BOS2, 14, false, -1, None, state::NULL), // 577
    st(sprite::BOS2, 14, false, 8, None, 579), // 578 BOS2_RAISE1
    st(sprite::BOS2, 13, false, 8, None, 580), // 579
    st(sprite::BOS2, 12, false, 8, None, 581), // 580
    st(sprite::BOS2, 11, false, 8, None, 582), // 581
    st(sprite::BOS2, 10, false, 8, None, 583), // 582
    st(sprite::BOS2, 9, false, 8, None, 584), // 583
    st(sprite::BOS2, 8, false, 8, None, state::BOS2_RUN1), // 584
    st(sprite::SKUL, 0, true, 10, Some(Look), state::SKULL_STND2), // 585 SKULL_STND
    st(sprite::SKUL, 1, true, 10, Some(Look), state::SKULL_STND), // 586 SKULL_STND2
    st(sprite::SKUL, 0, true, 6, Some(Chase), 588), // 587 SKULL_RUN1
    st(sprite::SKUL, 1, true, 6, Some(Chase), state::SKULL_RUN1), // 588 SKULL_RUN2
    st(sprite::SKUL, 2, true, 10, Some(FaceTarget), 590), // 589 SKULL_ATK1
    st(sprite::SKUL, 3, true, 4, Some(SkullAttack), 591), // 590 SKULL_ATK2
    st(sprite::SKUL, 2, true, 4, None, 592), // 591 SKULL_ATK3
    st(sprite::SKUL, 3, true, 4, None, state::SKULL_ATK3), // 592 SKULL_ATK4
    st(sprite::SKUL, 4, true, 3, None, 594), // 593 SKULL_PAIN
    st(sprite::SKUL, 4, true, 3, Some(Pain), state::SKULL_RUN1), // 594 SKULL_PAIN2
    st(sprite::SKUL, 5, true, 6, None, 596), // 595 SKULL_DIE1
    st(sprite::SKUL, 6, true, 6, Some(Scream), 597), // 596
    st(sprite::SKUL, 7, true, 6, None, 598), // 597
    st(sprite::SKUL, 8, true, 6, Some(Fall), 599), // 598
    st(sprite::SKUL, 9, true, 6, None, 600), // 599
    st(sprite::SKUL, 10, true, 6, None, state::NULL), // 600
    st(sprite::SPID, 0, false, 10, Some(Look), state::SPID_STND2), // 601 SPID_STND
    st(sprite::SPID, 1, false, 10, Some(Look), state::SPID_STND), // 602 SPID_STND2
    st(sprite::SPID, 0, false, 3, Some(Metal), 604), // 603 SPID_RUN1
    st(sprite::SPID, 0, false, 3, Some(Chase), 605), // 604
    st(sprite::SPID, 1, false, 3, Some(Chase), 606), // 605
    st(sprite::SPID, 1, false, 3, Some(Chase), 607), // 606
    st(sprite::SPID, 2, false, 3, Some(Metal), 608), // 607
    st(sprite::SPID, 2, false, 3, Some(Chase), 609), // 608
    st(sprite::SPID, 3, false, 3, Some(Chase), 610), // 609
    st(sprite::SPID, 3, false, 3, Some(Chase), 611), // 610
    st(sprite::SPID, 4, false, 3, Some(Metal), 612), // 611
    st(sprite::SPID, 4, false, 3, Some(Chase), 613), // 612
    st(sprite::SPID, 5, false, 3, Some(Chase), 614), // 613
    st(sprite::SPID, 5, false, 3, Some(Chase), state::SPID_RUN1), // 614
    st(sprite::SPID, 0, true, 20, Some(FaceTarget), 616), // 615 SPID_ATK1
    st(sprite::SPID, 6, true, 4, Some(SPosAttack), 617), // 616 SPID_ATK2
    st(sprite::SPID, 7, true, 4, Some(SPosAttack), 618), // 617 SPID_ATK3
    st(sprite::SPID, 7, true, 1, Some(SpidRefire), state::SPID_ATK2), // 618 SPID_ATK4
    st(sprite::SPID, 8, false, 3, None, 620), // 619 SPID_PAIN
    st(sprite::SPID, 8, false, 3, Some(Pain), state::SPID_RUN1), // 620 SPID_PAIN2
    st(sprite::SPID, 9, false, 20, Some(Scream), 622), // 621 SPID_DIE1
    st(sprite::SPID, 10, false, 10, Some(Fall), 623), // 622
    st(sprite::SPID, 11, false, 10, None, 624), // 623
    st(sprite::SPID, 12, false, 10, None, 625), // 624
    st(sprite::SPID, 13, false, 10, None, 626), // 625
    st(sprite::SPID, 14, false, 10, None, 627), // 626
    st(sprite::SPID, 15, false, 10, None, 628), // 627
    st(sprite::SPID, 16, false, 10, None, 629), // 628
    st(sprite::SPID, 17, false, 10, None, 630), // 629
    st(sprite::SPID, 18, false, 30, None, 631), // 630
    st(sprite::SPID, 18, false, -1, Some(BossDeath), state::NULL), // 631
    st(sprite::BSPI, 0, false, 10, Some(Look), state::BSPI_STND2), // 632 BSPI_STND
    st(sprite::BSPI, 1, false, 10, Some(Look), state::BSPI_STND), // 633 BSPI_STND2
    st(sprite::BSPI, 0, false, 20, None, state::BSPI_RUN1), // 634 BSPI_SIGHT
    st(sprite::BSPI, 0, false, 3, Some(BabyMetal), 636), // 635 BSPI_RUN1
    st(sprite::BSPI, 0, false, 3, Some(Chase), 637), // 636
    st(sprite::BSPI, 1, false, 3, Some(Chase), 638), // 637
    st(sprite::BSPI, 1, false, 3, Some(Chase), 639), // 638
    st(sprite::BSPI, 2, false, 3, Some(Chase), 640), // 639
    st(sprite::BSPI, 2, false, 3, Some(Chase), 641), // 640
    st(sprite::BSPI, 3, false, 3, Some(BabyMetal), 642), // 641
    st(sprite::BSPI, 3, false, 3, Some(Chase), 643), // 642
    st(sprite::BSPI, 4, false, 3, Some(Chase), 644), // 643
    st(sprite::BSPI, 4, false, 3, Some(Chase), 645), // 644
    st(sprite::BSPI, 5, false, 3, Some(Chase), 646), // 645
    st(sprite::BSPI, 5, false, 3, Some(Chase), state::BSPI_RUN1), // 646
    st(sprite::BSPI, 0, true, 20, Some(FaceTarget), 648), // 647 BSPI_ATK1
    st(sprite::BSPI, 6, true, 4, Some(BspiAttack), 649), // 648 BSPI_ATK2
    st(sprite::BSPI, 7, true, 4, None, 650), // 649 BSPI_ATK3
    st(sprite::BSPI, 7, true, 1, Some(SpidRefire), state::BSPI_ATK2), // 650 BSPI_ATK4
    st(sprite::BSPI, 8, false, 3, None, 652), // 651 BSPI_PAIN
    st(sprite::BSPI, 8, false, 3, Some(Pain), state::BSPI_RUN1), // 652 BSPI_PAIN2
    st(sprite::BSPI, 9, false, 20, Some(Scream), 654), // 653 BSPI_DIE1
    st(sprite::BSPI, 10, false, 7, Some(Fall), 655), // 654
    st(sprite::BSPI, 11, false, 7, None, 656), // 655
    st(sprite::BSPI, 12, false, 7, None, 657), // 656
    st(sprite::BSPI, 13, false, 7, None, 658), // 657
    st(sprite::BSPI, 14, false, 7, None, 659), // 658
    st(sprite::BSPI, 15, false, -1, Some(BossDeath), state::NULL), // 659
    st(sprite::BSPI, 15, false, 5, None, 661), // 660 BSPI_RAISE1
    st(sprite::BSPI, 14, false, 5, None, 662), // 661
    st(sprite::BSPI, 13, false, 5, None, 663), // 662
    st(sprite::BSPI, 12, false, 5, None, 664), // 663
    st(sprite::BSPI, 11, false, 5, None, 665), // 664
    st(sprite::BSPI, 10, false, 5, None, 666), // 665
    st(sprite::BSPI, 9, false, 5, None, state::BSPI_RUN1), // 666
    st(sprite::APLS, 0, true, 5, None, 668), // 667 ARACH_PLAZ
    st(sprite::APLS, 1, true, 5, None, state::ARACH_PLAZ), // 668 ARACH_PLAZ2
    st(sprite::APBX, 0, true, 5, None, 670), // 669 ARACH_PLEX1
    st(sprite::APBX, 1, true, 5, None, 671), // 670
    st(sprite::APBX, 2, true, 5, None, 672), // 671
    st(sprite::APBX, 3, true, 5, None, 673), // 672
    st(sprite::APBX, 4, true, 5, None, state::NULL), // 673
    st(sprite::CYBR, 0, false, 10, Some(Look), state::CYBER_STND2), // 674 CYBER_STND
    st(sprite::CYBR, 1, false, 10, Some(Look), state::CYBER_STND), // 675 CYBER_STND2
    st(sprite::CYBR, 0, false, 3, Some(Hoof), 677), // 676 CYBER_RUN1
    st(sprite::CYBR, 0, false, 3, Some(Chase), 678), // 677
    st(sprite::CYBR, 1, false, 3, Some(Chase), 679), // 678
    st(sprite::CYBR, 1, false, 3, Some(Chase), 680), // 679
    st(sprite::CYBR, 2, false, 3, Some(Chase), 681), // 680
    st(sprite::CYBR, 2, false, 3, Some(Chase), 682), // 681
    st(sprite::CYBR, 3, false, 3, Some(Metal), 683), // 682
    st(sprite::CYBR, 3, false, 3, Some(Chase), state::CYBER_RUN1), // 683
    st(sprite::CYBR, 4, false, 6, Some(FaceTarget), 685), // 684 CYBER_ATK1
    st(sprite::CYBR, 5, false, 12, Some(CyberAttack), 686), // 685
    st(sprite::CYBR, 4, false, 12, Some(FaceTarget), 687), // 686
    st(sprite::CYBR, 5, false, 12, Some(CyberAttack), 688), // 687
    st(sprite::CYBR, 4, false, 12, Some(FaceTarget), 689), // 688
    st(sprite::CYBR, 5, false, 12, Some(CyberAttack), state::CYBER_RUN1), // 689
    st(sprite::CYBR, 6, false, 10, Some(Pain), state::CYBER_RUN1), // 690 CYBER_PAIN
    st(sprite::CYBR, 7, false, 10, None, 692), // 691 CYBER_DIE1
    st(sprite::CYBR, 8, false, 10, Some(Scream), 693), // 692
    st(sprite::CYBR, 9, false, 10, None, 694), // 693
    st(sprite::CYBR, 10, false, 10, None, 695), // 694
    st(sprite::CYBR, 11, false, 10, None, 696), // 695
    st(sprite::CYBR, 12, false, 10, None, 697), // 696
    st(sprite::CYBR, 13, false, 10, None, 698), // 697
    st(sprite::CYBR, 14, false, 10, Some(Fall), 699), // 698
    st(sprite::CYBR, 15, false, 30, None, 700), // 699
    st(sprite::CYBR, 15, false, -1, Some(BossDeath), state::NULL), // 700
    st(sprite::PAIN, 0, false, 10, Some(Look), state::PAIN_STND), // 701 PAIN_STND
    st(sprite::PAIN, 0, false, 3, Some(Chase), 703), // 702 PAIN_RUN1
    st(sprite::PAIN, 0, false, 3, Some(Chase), 704), // 703
    st(sprite::PAIN, 1, false, 3, Some(Chase), 705), // 704
    st(sprite::PAIN, 1, false, 3, Some(Chase), 706), // 705
    st(sprite::PAIN, 2, false, 3, Some(Chase), 707), // 706
    st(sprite::PAIN, 2, false, 3, Some(Chase), state::PAIN_RUN1), // 707
    st(sprite::PAIN, 3, false, 5, Some(FaceTarget), 709), // 708 PAIN_ATK1
    st(sprite::PAIN, 4, false, 5, Some(FaceTarget), 710), // 709 PAIN_ATK2
    st(sprite::PAIN, 5, true, 5, Some(FaceTarget), 711), // 710 PAIN_ATK3
    st(sprite::PAIN, 5, true, 0, Some(PainAttack), state::PAIN_RUN1), // 711 PAIN_ATK4
    st(sprite::PAIN, 6, false, 6, None, 713), // 712 PAIN_PAIN
    st(sprite::PAIN, 6, false, 6, Some(Pain), state::PAIN_RUN1), // 713 PAIN_PAIN2
    st(sprite::PAIN, 7, true, 8, None, 715), // 714 PAIN_DIE1
    st(sprite::PAIN, 8, true, 8, Some(Scream), 716), // 715
    st(sprite::PAIN, 9, true, 8, None, 717), // 716
    st(sprite::PAIN, 10, true, 8, None, 718), // 717
    st(sprite::PAIN, 11, true, 8, Some(PainDie), 719), // 718
    st(sprite::PAIN, 12, true, 8, None, state::NULL), // 719
    st(sprite::PAIN, 12, false, 8, None, 721), // 720 PAIN_RAISE1
    st(sprite::PAIN, 11, false, 8, None, 722), // 721
    st(sprite::PAIN, 10, false, 8, None, 723), // 722
    st(sprite::PAIN, 9, false, 8, None, 724), // 723
    st(sprite::PAIN, 8, false, 8, None, 725), // 724
    st(sprite::PAIN, 7, false, 8, None, state::PAIN_RUN1), // 725
    st(sprite::SSWV, 0, false, 10, Some(Look), state::SSWV_STND2), // 726 SSWV_STND
    st(sprite::SSWV, 1, false, 10, Some(Look), state::SSWV_STND), // 727 SSWV_STND2
    st(sprite::SSWV, 0, false, 3, Some(Chase), 729), // 728 SSWV_RUN1
    st(sprite::SSWV, 0, false, 3, Some(Chase), 730), // 729
    st(sprite::SSWV, 1, false, 3, Some(Chase), 731), // 730
    st(sprite::SSWV, 1, false, 3, Some(Chase), 732), // 731
    st(sprite::SSWV, 2, false, 3, Some(Chase), 733), // 732
    st(sprite::SSWV, 2, false, 3, Some(Chase), 734), // 733
    st(sprite::SSWV, 3, false, 3, Some(Chase), 735), // 734
    st(sprite::SSWV, 3, false, 3, Some(Chase), state::SSWV_RUN1), // 735
    st(sprite::SSWV, 4, false, 10, Some(FaceTarget), 737), // 736 SSWV_ATK1
    st(sprite::SSWV, 5, false, 10, Some(FaceTarget), 738), // 737 SSWV_ATK2
    st(sprite::SSWV, 6, true, 4, Some(CPosAttack), 739), // 738 SSWV_ATK3
    st(sprite::SSWV, 5, false, 6, Some(FaceTarget), 740), // 739 SSWV_ATK4
    st(sprite::SSWV, 6, true, 4, Some(CPosAttack), 741), // 740 SSWV_ATK5
    st(sprite::SSWV, 5, false, 1, Some(CPosRefire), state::SSWV_ATK2), // 741 SSWV_ATK6
    st(sprite::SSWV, 7, false, 3, None, 743), // 742 SSWV_PAIN
    st(sprite::SSWV, 7, false, 3, Some(Pain), state::SSWV_RUN1), // 743 SSWV_PAIN2
    st(sprite::SSWV, 8, false, 5, None, 745), // 744 SSWV_DIE1
    st(sprite::SSWV, 9, false, 5, Some(Scream), 746), // 745
    st(sprite::SSWV, 10, false, 5, Some(Fall), 747), // 746
    st(sprite::SSWV, 11, false, 5, None, 748), // 747
    st(sprite::SSWV, 12, false, -1, None, state::NULL), // 748
    st(sprite::SSWV, 13, false, 5, None, 750), // 749 SSWV_XDIE1
    st(sprite::SSWV, 14, false, 5, Some(XScream), 751), // 750
    st(sprite::SSWV, 15, false, 5, Some(Fall), 752), // 751
    st(sprite::SSWV, 16, false, 5, None, 753), // 752
    st(sprite::SSWV, 17, false, 5, None, 754), // 753
    st(sprite::SSWV, 18, false, 5, None, 755), // 754
    st(sprite::SSWV, 19, false, 5, None, 756), // 755
    st(sprite::SSWV, 20, false, 5, None, 757), // 756
    st(sprite::SSWV, 21, false, -1, None, state::NULL), // 757
    st(sprite::SSWV, 12, false, 5, None, 759), // 758 SSWV_RAISE1
    st(sprite::SSWV, 11, false, 5, None, 760), // 759
    st(sprite::SSWV, 10, false, 5, None, 761), // 760
    st(sprite::SSWV, 9, false, 5, None, 762), // 761
    st(sprite::SSWV, 8, false, 5, None, state::SSWV_RUN1), // 762
    st(sprite::KEEN, 0, false, -1, None, state::KEENSTND), // 763 KEENSTND
    st(sprite::KEEN, 0, false, 6, None, 765), // 764 COMMKEEN
    st(sprite::KEEN, 1, false, 6, None, 766), // 765
    st(sprite::KEEN, 2, false, 6, Some(Scream), 767), // 766
    st(sprite::KEEN, 3, false, 6, None, 768), // 767
    st(sprite::KEEN, 4, false, 6, None, 769), // 768
    st(sprite::KEEN, 5, false, 6, None, 770), // 769
    st(sprite::KEEN, 6, false, 6, None, 771), // 770
    st(sprite::KEEN, 7, false, 6, None, 772), // 771
    st(sprite::KEEN, 8, false, 6, None, 773), // 772
    st(sprite::KEEN, 9, false, 6, None, 774), // 773
    st(sprite::KEEN, 10, false, 6, Some(KeenDie), 775), // 774
    st(sprite::KEEN, 11, false, -1, None, state::NULL), // 775
    st(sprite::KEEN, 12, false, 4, None, 777), // 776 KEENPAIN
    st(sprite::KEEN, 12, false, 8, Some(Pain), state::KEENSTND), // 777 KEENPAIN2
    st(sprite::BBRN, 0, false, -1, None, state::BRAIN), // 778 BRAIN
    st(sprite::BBRN, 1, false, 36, Some(BrainPain), state::BRAIN), // 779 BRAIN_PAIN
    st(sprite::BBRN, 0, false, 100, Some(BrainScream), 781), // 780 BRAIN_DIE1
    st(sprite::BBRN, 0, false, 10, None, 782), // 781 BRAIN_DIE2
    st(sprite::BBRN, 0, false, 10, None, 783), // 782 BRAIN_DIE3
    st(sprite::BBRN, 0, false, -1, Some(BrainDie), state::NULL), // 783 BRAIN_DIE4
    st(sprite::SSWV, 0, false, 10, Some(Look), state::BRAINEYE), // 784 BRAINEYE
    st(sprite::SSWV, 0, false, 181, Some(BrainAwake), state::BRAINEYE1), // 785 BRAINEYESEE
    st(sprite::SSWV, 0, false, 150, Some(BrainSpit), state::BRAINEYE1), // 786 BRAINEYE1
    st(sprite::BOSF, 0, true, 3, Some(SpawnSound), 788), // 787 SPAWN1
    st(sprite::BOSF, 1, true, 3, Some(SpawnFly), 789), // 788 SPAWN2
    st(sprite::BOSF, 2, true, 3, Some(SpawnFly), 790), // 789 SPAWN3
    st(sprite::BOSF, 3, true, 3, Some(SpawnFly), state::SPAWN1), // 790 SPAWN4
    st(sprite::FIRE, 0, true, 4, Some(Fire), 792), // 791 SPAWNFIRE1
    st(sprite::FIRE, 1, true, 4, Some(Fire), 793), // 792
    st(sprite::FIRE, 2, true, 4, Some(Fire), 794), // 793
    st(sprite::FIRE, 3, true, 4, Some(Fire), 795), // 794
    st(sprite::FIRE, 4, true, 4, Some(Fire), 796), // 795
    st(sprite::FIRE, 5, true, 4, Some(Fire), 797), // 796
    st(sprite::FIRE, 6, true, 4, Some(Fire), 798), // 797
    st(sprite::FIRE, 7, true, 4, Some(Fire), state::NULL), // 798
    st(sprite::MISL, 1, true, 10, None, 800), // 799 BRAINEXPLODE1
    st(sprite::MISL, 2, true, 10, None, 801), // 800 BRAINEXPLODE2
    st(sprite::MISL, 3, true, 10, Some(BrainExplode), state::NULL), // 801 BRAINEXPLODE3
    st(sprite::ARM1, 0, false, 6, None, 803), // 802 ARM1
    st(sprite::ARM1, 1, true, 7, None, state::ARM1), // 803 ARM1A
    st(sprite::ARM2, 0, false, 6, None, 805), // 804 ARM2
    st(sprite::ARM2, 1, true, 6, None, state::ARM2), // 805 ARM2A
    st(sprite::BAR1, 0, false, 6, None, 807), // 806 BAR1
    st(sprite::BAR1, 1, false, 6, None, state::BAR1), // 807 BAR2
    st(sprite::BEXP, 0, true, 5, None, 809), // 808 BEXP
    st(sprite::BEXP, 1, true, 5, Some(Scream), 810), // 809 BEXP2
    st(sprite::BEXP, 2, true, 5, None, 811), // 810 BEXP3
    st(sprite::BEXP, 3, true, 10, Some(Explode), 812), // 811 BEXP4
    st(sprite::BEXP, 4, true, 10, None, state::NULL), // 812 BEXP5
    st(sprite::FCAN, 0, true, 4, None, 814), // 813 BBAR1
    st(sprite::FCAN, 1, true, 4, None, 815), // 814
    st(sprite::FCAN, 2, true, 4, None, state::BBAR1), // 815
    st(sprite::BON1, 0, false, 6, None, 817), // 816 BON1
    st(sprite::BON1, 1, false, 6, None, 818), // 817
    st(sprite::BON1, 2, false, 6, None, 819), // 818
    st(sprite::BON1, 3, false, 6, None, 820), // 819
    st(sprite::BON1, 2, false, 6, None, 821), // 820
    st(sprite::BON1, 1, false, 6, None, state::BON1), // 821
    st(sprite::BON2, 0, false, 6, None, 823), // 822 BON2
    st(sprite::BON2, 1, false, 6, None, 824), // 823
    st(sprite::BON2, 2, false, 6, None, 825), // 824
    st(sprite::BON2, 3, false, 6, None, 826), // 825
    st(sprite::BON2, 2, false, 6, None, 827), // 826
    st(sprite::BON2, 1, false, 6, None, state::BON2), // 827
    st(sprite::BKEY, 0, false, 10, None, 829), // 828 BKEY
    st(sprite::BKEY, 1, true, 10, None, state::BKEY), // 829 BKEY2
    st(sprite::RKEY, 0, false, 10, None, 831), // 830 RKEY
    st(sprite::RKEY, 1, true, 10, None, state::RKEY), // 831 RKEY2
    st(sprite::YKEY, 0, false, 10, None, 833), // 832 YKEY
    st(sprite::YKEY, 1, true, 10, None, state::YKEY), // 833 YKEY2
    st(sprite::BSKU, 0, false, 10, None, 835), // 834 BSKULL
    st(sprite::BSKU, 1, true, 10, None, state::BSKULL), // 835 BSKULL2
    st(sprite::RSKU, 0, false, 10, None, 837), // 836 RSKULL
    st(sprite::RSKU, 1, true, 10, None, state::RSKULL), // 837 RSKULL2
    st(sprite::YSKU, 0, false, 10, None, 839), // 838 YSKULL
    st(sprite::YSKU, 1, true, 10, None, state::YSKULL), // 839 YSKULL2
    st(sprite::STIM, 0, false, -1, None, state::NULL), // 840 STIM
    st(sprite::MEDI, 0, false, -1, None, state::NULL), // 841 MEDI
    st(sprite::SOUL, 0, true, 6, None, 843), // 842 SOUL
    st(sprite::SOUL, 1, true, 6, None, 844), // 843
    st(sprite::SOUL, 2, true, 6, None, 845), // 844
    st(sprite::SOUL, 3, true, 6, None, 846), // 845
    st(sprite::SOUL, 2, true, 6, None, 847), // 846
    st(sprite::SOUL, 1, true, 6, None, state::SOUL), // 847
    st(sprite::PINV, 0, true, 6, None, 849), // 848 PINV
    st(sprite::PINV, 1, true, 6, None, 850), // 849
    st(sprite::PINV, 2, true, 6, None, 851), // 850
    st(sprite::PINV, 3, true, 6, None, state::PINV), // 851
    st(sprite::PSTR, 0, true, -1, None, state::NULL), // 852 PSTR
    st(sprite::PINS, 0, true, 6, None, 854), // 853 PINS
    st(sprite::PINS, 1, true, 6, None, 855), // 854
    st(sprite::PINS, 2, true, 6, None, 856), // 855
    st(sprite::PINS, 3, true, 6, None, state::PINS), // 856
    st(sprite::MEGA, 0, true, 6, None, 858), // 857 MEGA
    st(sprite::MEGA, 1, true, 6, None, 859), // 858
    st(sprite::MEGA, 2, true, 6, None, 860), // 859
    st(sprite::MEGA, 3, true, 6, None, state::MEGA), // 860
    st(sprite::SUIT, 0, true, -1, None, state::NULL), // 861 SUIT
    st(sprite::PMAP, 0, true, 6, None, 863), // 862 PMAP
    st(sprite::PMAP, 1, true, 6, None, 864), // 863
    st(sprite::PMAP, 2, true, 6, None, 865), // 864
    st(sprite::PMAP, 3, true, 6, None, 866), // 865
    st(sprite::PMAP, 2, true, 6, None, 867), // 866
    st(sprite::PMAP, 1, true, 6, None, state::PMAP), // 867
    st(sprite::PVIS, 0, true, 6, None, 869), // 868 PVIS
    st(sprite::PVIS, 1, false, 6, None, state::PVIS), // 869 PVIS2
    st(sprite::CLIP, 0, false, -1, None, state::NULL), // 870 CLIP
    st(sprite::AMMO, 0, false, -1, None, state::NULL), // 871 AMMO
    st(sprite::ROCK, 0, false, -1, None, state::NULL), // 872 ROCK
    st(sprite::BROK, 0, false, -1, None, state::NULL), // 873 BROK
    st(sprite::CELL, 0, false, -1, None, state::NULL), // 874 CELL
    st(sprite::CELP, 0, false, -1, None, state::NULL), // 875 CELP
    st(sprite::SHEL, 0, false, -1, None, state::NULL), // 876 SHEL
    st(sprite::SBOX, 0, false, -1, None, state::NULL), // 877 SBOX
    st(sprite::BPAK, 0, false, -1, None, state::NULL), // 878 BPAK
    st(sprite::BFUG, 0, false, -1, None, state::NULL), // 879 BFUG
    st(sprite::MGUN, 0, false, -1, None, state::NULL), // 880 MGUN
    st(sprite::CSAW, 0, false, -1, None, state::NULL), // 881 CSAW
    st(sprite::LAUN, 0, false, -1, None, state::NULL), // 882 LAUN
    st(sprite::PLAS, 0, false, -1, None, state::NULL), // 883 PLAS
    st(sprite::SHOT, 0, false, -1, None, state::NULL), // 884 SHOT
    st(sprite::SGN2, 0, false, -1, None, state::NULL), // 885 SHOT2
    st(sprite::COLU, 0, true, -1, None, state::NULL), // 886 COLU
    st(sprite::SMT2, 0, false, -1, None, state::NULL), // 887 STALAG
    st(sprite::GOR1, 0, false, 10, None, 889), // 888 BLOODYTWITCH1
    st(sprite::GOR1, 1, false, 15, None, 890), // 889
    st(sprite::GOR1, 2, false, 8, None, 891), // 890
    st(sprite::GOR1, 1, false, 6, None, state::BLOODYTWITCH1), // 891
    st(sprite::PLAY, 13, false, -1, None, state::NULL), // 892 DEADTORSO
    st(sprite::PLAY, 18, false, -1, None, state::NULL), // 893 DEADBOTTOM
    st(sprite::POL2, 0, false, -1, None, state::NULL), // 894 HEADSONSTICK
    st(sprite::POB1, 0, false, -1, None, state::NULL), // 895 GIBS
    st(sprite::POL4, 0, false, -1, None, state::NULL), // 896 HEADONASTICK
    st(sprite::POL3, 0, true, 6, None, 898), // 897 HEADCANDLES1
    st(sprite::POL3, 1, true, 6, None, state::HEADCANDLES1), // 898 HEADCANDLES2
    st(sprite::POL1, 0, false, -1, None, state::NULL), // 899 DEADSTICK
    st(sprite::POL6, 0, false, 6, None, 901), // 900 LIVESTICK1
    st(sprite::POL6, 1, false, 8, None, state::LIVESTICK1), // 901 LIVESTICK2
    st(sprite::GOR2, 0, false, -1, None, state::NULL), // 902 MEAT2
    st(sprite::GOR3, 0, false, -1, None, state::NULL), // 903 MEAT3
    st(sprite::GOR4, 0, false, -1, None, state::NULL), // 904 MEAT4
    st(sprite::GOR5, 0, false, -1, None, state::NULL), // 905 MEAT5
    st(sprite::SMIT, 0, false, -1, None, state::NULL), // 906 STALAGTITE
    st(sprite::COL1, 0, false, -1, None, state::NULL), // 907 TALLGRNCOL
    st(sprite::COL2, 0, false, -1, None, state::NULL), // 908 SHRTGRNCOL
    st(sprite::COL3, 0, false, -1, None, state::NULL), // 909 TALLREDCOL
    st(sprite::COL4, 0, false, -1, None, state::NULL), // 910 SHRTREDCOL
    st(sprite::CAND, 0, true, -1, None, state::NULL), // 911 CANDLESTIK
    st(sprite::CBRA, 0, true, -1, None, state::NULL), // 912 CANDELABRA
    st(sprite::COL6, 0, false, -1, None, state::NULL), // 913 SKULLCOL
    st(sprite::TRE1, 0, false, -1, None, state::NULL), // 914 TORCHTREE
    st(sprite::TRE2, 0, false, -1, None, state::NULL), // 915 BIGTREE
    st(sprite::ELEC, 0, false, -1, None, state::NULL), // 916 TECHPILLAR
    st(sprite::CEYE, 0, true, 6, None, 918), // 917 EVILEYE1
    st(sprite::CEYE, 1, true, 6, None, 919), // 918
    st(sprite::CEYE, 2, true, 6, None, 920), // 919
    st(sprite::CEYE, 1, true, 6, None, state::EVILEYE1), // 920
    st(sprite::FSKU, 0, true, 6, None, 922), // 921 FLOATSKULL1
    st(sprite::FSKU, 1, true, 6, None, 923), // 922
    st(sprite::FSKU, 2, true, 6, None, state::FLOATSKULL1), // 923
    st(sprite::COL5, 0, false, 14, None, 925), // 924 HEARTCOL1
    st(sprite::COL5, 1, false, 14, None, state::HEARTCOL1), // 925 HEARTCOL2
    st(sprite::TBLU, 0, true, 4, None, 927), // 926 BLUETORCH1
    st(sprite::TBLU, 1, true, 4, None, 928), // 927
    st(sprite::TBLU, 2, true, 4, None, 929), // 928
    st(sprite::TBLU, 3, true, 4, None, state::BLUETORCH1), // 929
    st(sprite::TGRN, 0, true, 4, None, 931), // 930 GREENTORCH1
    st(sprite::TGRN, 1, true, 4, None, 932), // 931
    st(sprite::TGRN, 2, true, 4, None, 933), // 932
    st(sprite::TGRN, 3, true, 4, None, state::GREENTORCH1), // 933
    st(sprite::TRED, 0, true, 4, None, 935), // 934 REDTORCH1
    st(sprite::TRED, 1, true, 4, None, 936), // 935
    st(sprite::TRED, 2, true, 4, None, 937), // 936
    st(sprite::TRED, 3, true, 4, None, state::REDTORCH1), // 937
    st(sprite::SMBT, 0, true, 4, None, 939), // 938 BTORCHSHRT1
    st(sprite::SMBT, 1, true, 4, None, 940), // 939
    st(sprite::SMBT, 2, true, 4, None, 941), // 940
    st(sprite::SMBT, 3, true, 4, None, state::BTORCHSHRT1), // 941
    st(sprite::SMGT, 0, true, 4, None, 943), // 942 GTORCHSHRT1
    st(sprite::SMGT, 1, true, 4, None, 944), // 943
    st(sprite::SMGT, 2, true, 4, None, 945), // 944
    st(sprite::SMGT, 3, true, 4, None, state::GTORCHSHRT1), // 945
    st(sprite::SMRT, 0, true, 4, None, 947), // 946 RTORCHSHRT1
    st(sprite::SMRT, 1, true, 4, None, 948), // 947
    st(sprite::SMRT, 2, true, 4, None, 949), // 948
    st(sprite::SMRT, 3, true, 4, None, state::RTORCHSHRT1), // 949
    st(sprite::HDB1, 0, false, -1, None, state::NULL), // 950 HANGNOGUTS
    st(sprite::HDB2, 0, false, -1, None, state::NULL), // 951 HANGBNOBRAIN
    st(sprite::HDB3, 0, false, -1, None, state::NULL), // 952 HANGTLOOKDN
    st(sprite::HDB4, 0, false, -1, None, state::NULL), // 953 HANGTSKULL
    st(sprite::HDB5, 0, false, -1, None, state::NULL), // 954 HANGTLOOKUP
    st(sprite::HDB6, 0, false, -1, None, state::NULL), // 955 HANGTNOBRAIN
    st(sprite::POB1, 0, false, -1, None, state::NULL), // 956 COLONGIBS
    st(sprite::POB2, 0, false, -1, None, state::NULL), // 957 SMALLPOOL
    st(sprite::BRS1, 0, false, -1, None, state::NULL), // 958 BRAINSTEM
    st(sprite::TLMP, 0, true, 4, None, 960), // 959 TECHLAMP1
    st(sprite::TLMP, 1, true, 4, None, 961), // 960
    st(sprite::TLMP, 2, true, 4, None, 962), // 961
    st(sprite::TLMP, 3, true, 4, None, state::TECHLAMP1), // 962
    st(sprite::TLP2, 0, true, 4, None, 964), // 963 TECH2LAMP1
    st(sprite::TLP2, 1, true, 4, None, 965), // 964
    st(sprite::TLP2, 2, true, 4, None, 966), // 965
    st(sprite::TLP2, 3, true, 4, None, state::TECH2LAMP1), // 966
];
